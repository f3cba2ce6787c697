//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice (sans vue, sans horloge).
//!
//! Rôle : replier chaque touche (chiffre, opérateur, commande) dans un état
//! de session à quatre champs, puis fournir un rendu (affichage + aperçu).
//!
//! Contrats :
//! - Actions déterministes, synchrones, sans effet de bord caché.
//! - `precedente` et `operateur` vivent et meurent ensemble (tous deux None,
//!   ou tous deux renseignés) — vérifié par chaque transition.
//! - `saisie` reste toujours un littéral numérique non vide.
//! - Entrées mal formées (double point, backspace sur résultat) : no-op
//!   silencieux. Seules deux erreurs métier existent (voir erreurs.rs).

use super::erreurs::ErreurCalc;
use super::format::{format_nombre, lire_nombre, symbole_operateur};
use super::jetons::{Commande, Operateur, Touche};

/// Sortie de rendu : ce que l’hôte pousse dans ses éléments visibles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendu {
    /// Valeur courante, verbatim.
    pub affichage: String,
    /// Expression en cours (`precedente glyphe saisie`), vide sinon.
    pub apercu: String,
}

/// État de session : quatre champs, créés aux valeurs par défaut,
/// mutés en place par chaque opération, remis à zéro en bloc par Effacer.
#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    saisie: String,
    precedente: Option<String>,
    operateur: Option<Operateur>,
    raz_prochaine: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: "0".to_string(),
            precedente: None,
            operateur: None,
            raz_prochaine: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Dispatch ------------------------ */

    /// Point d’entrée unique : applique une touche à l’état.
    ///
    /// Ok(()) si la touche est acceptée (ou no-op silencieux) ; Err pour les
    /// deux erreurs métier, à présenter par l’hôte. Le rendu à pousser après
    /// chaque touche s’obtient via [`Moteur::rendu`].
    pub fn toucher(&mut self, touche: Touche) -> Result<(), ErreurCalc> {
        match touche {
            Touche::Chiffre(c) => {
                self.saisir_chiffre(c);
                Ok(())
            }
            Touche::Operateur(op) => self.choisir_operateur(op),
            Touche::Commande(Commande::Effacer) => {
                self.tout_effacer();
                Ok(())
            }
            Touche::Commande(Commande::Retour) => {
                self.effacer_dernier();
                Ok(())
            }
            Touche::Commande(Commande::Egal) => self.egal(),
            Touche::Commande(Commande::Racine) => self.racine(),
            Touche::Commande(Commande::Pourcent) => {
                self.pourcent();
                Ok(())
            }
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou point décimal.
    /// - après un opérateur ou un résultat (raz_prochaine) : repart sur un
    ///   nombre neuf ("0." si point)
    /// - double point : ignoré
    /// - "0" de tête : remplacé par le chiffre tapé
    pub fn saisir_chiffre(&mut self, c: char) {
        if self.raz_prochaine {
            self.saisie = if c == '.' { "0.".to_string() } else { c.to_string() };
            self.raz_prochaine = false;
            return;
        }

        if c == '.' && self.saisie.contains('.') {
            return;
        }
        if self.saisie == "0" && c != '.' {
            self.saisie = c.to_string();
        } else {
            self.saisie.push(c);
        }
    }

    /// Backspace : retire le dernier caractère de la saisie.
    /// No-op si raz_prochaine (on ne rogne pas un résultat tout frais).
    /// Un seul caractère restant -> retour à "0".
    pub fn effacer_dernier(&mut self) {
        if self.raz_prochaine {
            return;
        }
        if self.saisie.chars().count() == 1 {
            self.saisie = "0".to_string();
        } else {
            self.saisie.pop();
        }
    }

    /* ------------------------ Opérateurs & calcul ------------------------ */

    /// Sélection d’un opérateur binaire.
    ///
    /// Enchaînement : si un opérateur attend déjà ET qu’un second opérande a
    /// été tapé (raz_prochaine éteint), on calcule d’abord (`a + b ×` évalue
    /// a+b avant de retenir ×). Sans second opérande, on remplace simplement
    /// l’opérateur en attente. Une division par zéro pendant l’enchaînement
    /// remonte telle quelle (le moteur est déjà remis à zéro).
    pub fn choisir_operateur(&mut self, op: Operateur) -> Result<(), ErreurCalc> {
        if self.operateur.is_some() && !self.raz_prochaine {
            self.egal()?;
        }
        self.precedente = Some(self.saisie.clone());
        self.operateur = Some(op);
        self.raz_prochaine = true;
        Ok(())
    }

    /// Égal : applique l’opération en attente.
    /// No-op si rien n’attend. Division par zéro : remise à zéro totale
    /// (auto-guérison) puis signalement à l’hôte.
    pub fn egal(&mut self) -> Result<(), ErreurCalc> {
        let (Some(op), Some(prec)) = (self.operateur, self.precedente.as_deref()) else {
            return Ok(());
        };

        let a = lire_nombre(prec);
        let b = lire_nombre(&self.saisie);

        let resultat = match op {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Puissance => a.powf(b),
            Operateur::Division => {
                if b == 0.0 {
                    self.tout_effacer();
                    return Err(ErreurCalc::DivisionParZero);
                }
                a / b
            }
        };

        self.saisie = format_nombre(resultat);
        self.precedente = None;
        self.operateur = None;
        self.raz_prochaine = true;
        Ok(())
    }

    /* ------------------------ Commandes unaires ------------------------ */

    /// Racine carrée de la saisie courante.
    /// Négatif : erreur signalée, état laissé intact (asymétrie voulue
    /// vis-à-vis de la division par zéro).
    pub fn racine(&mut self) -> Result<(), ErreurCalc> {
        let v = lire_nombre(&self.saisie);
        if v < 0.0 {
            return Err(ErreurCalc::RacineDeNegatif);
        }
        self.saisie = format_nombre(v.sqrt());
        self.raz_prochaine = true;
        Ok(())
    }

    /// Pourcent : saisie / 100. Jamais d’erreur (pas de domaine restreint).
    pub fn pourcent(&mut self) {
        self.saisie = format_nombre(lire_nombre(&self.saisie) / 100.0);
        self.raz_prochaine = true;
    }

    /// C : remise à zéro totale des quatre champs.
    pub fn tout_effacer(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Rendu ------------------------ */

    /// Rendu courant : à pousser après chaque touche acceptée,
    /// et une fois au démarrage (état par défaut).
    pub fn rendu(&self) -> Rendu {
        let apercu = match (&self.precedente, self.operateur) {
            (Some(prec), Some(op)) => {
                format!("{prec} {} {}", symbole_operateur(op), self.saisie)
            }
            _ => String::new(),
        };
        Rendu {
            affichage: self.saisie.clone(),
            apercu,
        }
    }

    /// Valeur courante, verbatim (raccourci sans construire un Rendu).
    pub fn affichage(&self) -> &str {
        &self.saisie
    }
}
