// src/noyau/format.rs

use super::jetons::Operateur;

/* ------------------------ Nombres <-> chaînes ------------------------ */

/// f64 -> chaîne canonique.
///
/// Choix documenté : `Display` de f64 (Rust), c’est-à-dire la plus courte
/// écriture décimale qui re-parse exactement (round-trip), sans notation
/// exponentielle et indépendante de la locale. Exemples : 8.0 -> "8",
/// 50.0/100.0 -> "0.5".
pub fn format_nombre(valeur: f64) -> String {
    format!("{valeur}")
}

/// Chaîne -> f64.
///
/// Invariant d’appel : la saisie courante est toujours un littéral numérique
/// valide (chiffres, au plus un point) ou la forme `format_nombre` d’un
/// résultat précédent ("-5", "inf", "NaN" compris) — tous re-parsent.
/// NaN en garde-fou si l’invariant était violé.
pub fn lire_nombre(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

/* ------------------------ Glyphes opérateurs ------------------------ */

/// Glyphe d’aperçu d’un opérateur.
/// Soustraction = '−' (U+2212, signe moins), pas le tiret ASCII.
pub fn symbole_operateur(op: Operateur) -> char {
    match op {
        Operateur::Addition => '+',
        Operateur::Soustraction => '−',
        Operateur::Multiplication => '×',
        Operateur::Division => '÷',
        Operateur::Puissance => '^',
    }
}
