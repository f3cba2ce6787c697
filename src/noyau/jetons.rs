// src/noyau/jetons.rs

/// Opérateur binaire en attente (un seul à la fois, pas de priorités).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
}

/// Commande nommée (boutons hors pavé chiffres/opérateurs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Effacer,
    Retour, // backspace
    Egal,
    Racine,
    Pourcent,
}

/// Touche : l’évènement d’entrée unitaire que le moteur sait traiter.
///
/// Trois familles, comme sur le clavier physique de la calculatrice :
/// - chiffre (ou point décimal)
/// - opérateur binaire
/// - commande nommée
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Commande(Commande),
}

impl Touche {
    /// Chiffre ou point décimal. None pour tout autre caractère.
    pub fn depuis_chiffre(c: char) -> Option<Touche> {
        if c.is_ascii_digit() || c == '.' {
            Some(Touche::Chiffre(c))
        } else {
            None
        }
    }

    /// Nom d’action (vocabulaire des boutons) -> Touche.
    /// Supporte:
    /// - commandes : clear / backspace / equals / sqrt / percent
    /// - opérateurs : add / subtract / multiply / divide / power
    pub fn depuis_action(action: &str) -> Option<Touche> {
        use Commande::*;
        use Operateur::*;

        let t = match action {
            "clear" => Touche::Commande(Effacer),
            "backspace" => Touche::Commande(Retour),
            "equals" => Touche::Commande(Egal),
            "sqrt" => Touche::Commande(Racine),
            "percent" => Touche::Commande(Pourcent),

            "add" => Touche::Operateur(Addition),
            "subtract" => Touche::Operateur(Soustraction),
            "multiply" => Touche::Operateur(Multiplication),
            "divide" => Touche::Operateur(Division),
            "power" => Touche::Operateur(Puissance),

            _ => return None,
        };
        Some(t)
    }

    /// Caractère clavier -> Touche (pour la saisie au clavier dans la vue).
    ///
    /// NOTE: Enter/Backspace/Escape ne passent pas ici (évènements clavier
    /// dédiés côté vue) ; on ne mappe que les caractères imprimables.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        use Commande::*;
        use Operateur::*;

        if let Some(t) = Touche::depuis_chiffre(c) {
            return Some(t);
        }

        let t = match c {
            '+' => Touche::Operateur(Addition),
            '-' => Touche::Operateur(Soustraction),
            '*' => Touche::Operateur(Multiplication),
            '/' => Touche::Operateur(Division),
            '^' => Touche::Operateur(Puissance),

            '=' => Touche::Commande(Egal),
            '%' => Touche::Commande(Pourcent),

            _ => return None,
        };
        Some(t)
    }
}
