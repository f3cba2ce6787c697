//! Tests du moteur : invariants de saisie, enchaînements, erreurs métier.
//!
//! Notes :
//! - On passe systématiquement par `toucher` (le dispatch public), comme le
//!   ferait l’hôte, plutôt que par les méthodes une à une.
//! - Les vecteurs numériques supposent le formatage `Display` de f64
//!   (round-trip le plus court) : 8.0 -> "8", 0.1+0.2 -> "0.30000000000000004".

use super::erreurs::ErreurCalc;
use super::jetons::{Commande, Operateur, Touche};
use super::moteur::Moteur;

/* ------------------------ Helpers ------------------------ */

fn tape(m: &mut Moteur, chiffres: &str) {
    for c in chiffres.chars() {
        m.toucher(Touche::Chiffre(c))
            .unwrap_or_else(|e| panic!("chiffre {c:?} refusé : {e}"));
    }
}

fn operateur(m: &mut Moteur, op: Operateur) {
    m.toucher(Touche::Operateur(op))
        .unwrap_or_else(|e| panic!("opérateur {op:?} refusé : {e}"));
}

fn commande(m: &mut Moteur, cmd: Commande) {
    m.toucher(Touche::Commande(cmd))
        .unwrap_or_else(|e| panic!("commande {cmd:?} refusée : {e}"));
}

fn assert_affichage(m: &Moteur, attendu: &str) {
    assert_eq!(m.rendu().affichage, attendu);
}

/* ------------------------ Saisie : invariants ------------------------ */

#[test]
fn rendu_initial() {
    let m = Moteur::default();
    let r = m.rendu();
    assert_eq!(r.affichage, "0");
    assert_eq!(r.apercu, "");
}

#[test]
fn zero_de_tete_remplace() {
    let mut m = Moteur::default();
    tape(&mut m, "007");
    assert_affichage(&m, "7");
}

#[test]
fn point_decimal_unique() {
    let mut m = Moteur::default();
    tape(&mut m, "1.2.3.4");
    // les points surnuméraires sont ignorés en silence
    assert_affichage(&m, "1.234");
}

#[test]
fn point_en_tete_donne_zero_point() {
    let mut m = Moteur::default();
    tape(&mut m, ".5");
    assert_affichage(&m, "0.5");
}

#[test]
fn point_apres_resultat_repart_sur_zero_point() {
    let mut m = Moteur::default();
    tape(&mut m, "5");
    operateur(&mut m, Operateur::Addition);
    // raz_prochaine est levé : "." démarre un nombre neuf
    tape(&mut m, ".5");
    assert_affichage(&m, "0.5");
    assert_eq!(m.rendu().apercu, "5 + 0.5");
}

/* ------------------------ Backspace ------------------------ */

#[test]
fn backspace_rogne_la_saisie() {
    let mut m = Moteur::default();
    tape(&mut m, "123");
    commande(&mut m, Commande::Retour);
    assert_affichage(&m, "12");
}

#[test]
fn backspace_sur_un_caractere_revient_a_zero() {
    let mut m = Moteur::default();
    tape(&mut m, "7");
    commande(&mut m, Commande::Retour);
    assert_affichage(&m, "0");
    // et encore un : toujours "0"
    commande(&mut m, Commande::Retour);
    assert_affichage(&m, "0");
}

#[test]
fn backspace_sur_resultat_frais_est_un_no_op() {
    let mut m = Moteur::default();
    tape(&mut m, "5");
    operateur(&mut m, Operateur::Addition);
    tape(&mut m, "3");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "8");

    commande(&mut m, Commande::Retour);
    assert_affichage(&m, "8");
}

/* ------------------------ Calculs ------------------------ */

#[test]
fn addition_simple() {
    let mut m = Moteur::default();
    tape(&mut m, "5");
    operateur(&mut m, Operateur::Addition);
    tape(&mut m, "3");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "8");
    assert_eq!(m.rendu().apercu, "");
}

#[test]
fn enchainement_calcule_au_changement_d_operateur() {
    // 5 + 3 × 2 = : 5+3 évalué au moment du ×, puis 8×2 au égal
    let mut m = Moteur::default();
    tape(&mut m, "5");
    operateur(&mut m, Operateur::Addition);
    tape(&mut m, "3");
    operateur(&mut m, Operateur::Multiplication);
    assert_affichage(&m, "8");
    tape(&mut m, "2");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "16");
}

#[test]
fn operateur_sans_second_operande_est_remplace() {
    // 5 + × : pas de second opérande tapé, donc pas de calcul,
    // l’opérateur en attente est simplement remplacé
    let mut m = Moteur::default();
    tape(&mut m, "5");
    operateur(&mut m, Operateur::Addition);
    operateur(&mut m, Operateur::Multiplication);
    assert_affichage(&m, "5");
    assert_eq!(m.rendu().apercu, "5 × 5");
}

#[test]
fn egal_deux_fois_est_idempotent() {
    let mut m = Moteur::default();
    tape(&mut m, "5");
    operateur(&mut m, Operateur::Addition);
    tape(&mut m, "3");
    commande(&mut m, Commande::Egal);
    let apres_premier = m.clone();

    // plus d’opérateur en attente : le second égal ne change rien
    commande(&mut m, Commande::Egal);
    assert_eq!(m, apres_premier);
}

#[test]
fn egal_sans_operation_en_attente_est_un_no_op() {
    let mut m = Moteur::default();
    tape(&mut m, "42");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "42");
}

#[test]
fn puissance() {
    let mut m = Moteur::default();
    tape(&mut m, "2");
    operateur(&mut m, Operateur::Puissance);
    tape(&mut m, "10");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "1024");
}

#[test]
fn flottants_round_trip_le_plus_court() {
    let mut m = Moteur::default();
    tape(&mut m, "0.1");
    operateur(&mut m, Operateur::Addition);
    tape(&mut m, "0.2");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "0.30000000000000004");
}

/* ------------------------ Erreurs métier ------------------------ */

#[test]
fn division_par_zero_signale_et_remet_a_zero() {
    let mut m = Moteur::default();
    tape(&mut m, "7");
    operateur(&mut m, Operateur::Division);
    tape(&mut m, "0");

    let err = m.toucher(Touche::Commande(Commande::Egal));
    assert_eq!(err, Err(ErreurCalc::DivisionParZero));
    assert_eq!(m, Moteur::default());
}

#[test]
fn division_par_zero_pendant_un_enchainement() {
    // 7 ÷ 0 + : l’erreur remonte au moment du choix d’opérateur,
    // et la sélection est abandonnée sur l’état remis à zéro
    let mut m = Moteur::default();
    tape(&mut m, "7");
    operateur(&mut m, Operateur::Division);
    tape(&mut m, "0");

    let err = m.toucher(Touche::Operateur(Operateur::Addition));
    assert_eq!(err, Err(ErreurCalc::DivisionParZero));
    assert_eq!(m, Moteur::default());
}

#[test]
fn racine_de_negatif_laisse_l_etat_intact() {
    // -5 n’est atteignable que par calcul (pas de saisie de signe)
    let mut m = Moteur::default();
    tape(&mut m, "3");
    operateur(&mut m, Operateur::Soustraction);
    tape(&mut m, "8");
    commande(&mut m, Commande::Egal);
    assert_affichage(&m, "-5");

    let err = m.toucher(Touche::Commande(Commande::Racine));
    assert_eq!(err, Err(ErreurCalc::RacineDeNegatif));
    assert_affichage(&m, "-5");
}

#[test]
fn racine_carree() {
    let mut m = Moteur::default();
    tape(&mut m, "9");
    commande(&mut m, Commande::Racine);
    assert_affichage(&m, "3");

    // résultat frais : le chiffre suivant repart sur un nombre neuf
    tape(&mut m, "4");
    assert_affichage(&m, "4");
}

/* ------------------------ Pourcent & remise à zéro ------------------------ */

#[test]
fn pourcent_divise_par_cent() {
    let mut m = Moteur::default();
    tape(&mut m, "50");
    commande(&mut m, Commande::Pourcent);
    assert_affichage(&m, "0.5");
}

#[test]
fn effacer_revient_a_l_etat_initial() {
    let mut m = Moteur::default();
    tape(&mut m, "12.5");
    operateur(&mut m, Operateur::Multiplication);
    tape(&mut m, "3");
    commande(&mut m, Commande::Effacer);
    assert_eq!(m, Moteur::default());
}

/* ------------------------ Aperçu ------------------------ */

#[test]
fn apercu_utilise_les_bons_glyphes() {
    let cas = [
        (Operateur::Addition, "5 + 5"),
        (Operateur::Soustraction, "5 \u{2212} 5"), // '−', pas '-'
        (Operateur::Multiplication, "5 × 5"),
        (Operateur::Division, "5 ÷ 5"),
        (Operateur::Puissance, "5 ^ 5"),
    ];

    for (op, attendu) in cas {
        let mut m = Moteur::default();
        tape(&mut m, "5");
        operateur(&mut m, op);
        assert_eq!(m.rendu().apercu, attendu, "op={op:?}");
    }
}

#[test]
fn apercu_suit_la_saisie_du_second_operande() {
    let mut m = Moteur::default();
    tape(&mut m, "12");
    operateur(&mut m, Operateur::Division);
    assert_eq!(m.rendu().apercu, "12 ÷ 12");
    tape(&mut m, "4");
    assert_eq!(m.rendu().apercu, "12 ÷ 4");
}
