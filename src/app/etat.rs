//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’instance du moteur et la dernière erreur métier à
//! afficher. Aucune logique de calcul ici (tout vit dans le noyau).
//!
//! Contrats :
//! - Une touche acceptée efface le message d’erreur courant.
//! - Une touche refusée remplace le message (pas de dialogue bloquant :
//!   l’hôte décide de la présentation, ici une ligne colorée dans la vue).

use crate::noyau::{Moteur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    /// Moteur de saisie (état de session à quatre champs).
    pub moteur: Moteur,

    /// Dernier message d’erreur métier ; vide si la dernière touche est passée.
    pub erreur: String,
}

impl AppCalc {
    /// Route une touche vers le moteur et tient le message d’erreur à jour.
    pub fn toucher(&mut self, touche: Touche) {
        match self.moteur.toucher(touche) {
            Ok(()) => self.erreur.clear(),
            Err(e) => {
                tracing::warn!(?touche, "saisie refusée : {e}");
                self.erreur = e.to_string();
            }
        }
    }
}
