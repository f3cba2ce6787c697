//! Noyau : moteur de saisie de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs  : touches (chiffres, opérateurs, commandes) + parsing
//! - moteur.rs  : état de session (4 champs) + transitions + rendu
//! - format.rs  : nombres <-> chaînes, glyphes opérateurs
//! - erreurs.rs : les deux erreurs métier

pub mod erreurs;
pub mod format;
pub mod jetons;
pub mod moteur;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use erreurs::ErreurCalc;
pub use jetons::{Commande, Operateur, Touche};
pub use moteur::{Moteur, Rendu};
