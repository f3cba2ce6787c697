// src/noyau/erreurs.rs
//
// Les deux seules erreurs métier du moteur. Tout le reste des entrées
// mal formées (double point, backspace sur résultat) est un no-op
// silencieux, pas une erreur.

use thiserror::Error;

/// Erreur métier recouvrable, à afficher à l’utilisateur par l’hôte.
///
/// Contrat (asymétrie voulue, conservée du comportement d’origine) :
/// - DivisionParZero : le moteur se remet lui-même à zéro avant de signaler.
/// - RacineDeNegatif : l’état est laissé intact (l’utilisateur corrige).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("Erreur : division par zéro")]
    DivisionParZero,

    #[error("Erreur : racine carrée d’un nombre négatif")]
    RacineDeNegatif,
}
