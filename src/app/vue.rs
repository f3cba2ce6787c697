// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé de boutons : une touche = un évènement moteur, rien de plus
// - Clavier : chiffres/opérateurs via Event::Text, Enter = égal,
//   Backspace = retour (Escape est géré dans app.rs)
// - Écran : aperçu (expression en cours) au-dessus de l’affichage
//
// Note :
// - L’écran relit moteur.rendu() à chaque frame : cela couvre aussi le
//   rendu initial de l’état par défaut ("0", aperçu vide).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Commande, Operateur, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Pavé");
        ui.add_space(6.0);

        self.clavier(ui);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let rendu = self.moteur.rendu();

        // Aperçu : ligne non éditable "precedente glyphe saisie" (vide sinon)
        Self::champ_ecran(ui, "apercu_out", &rendu.apercu, 14.0);

        // Affichage : valeur courante, verbatim
        Self::champ_ecran(ui, "affichage_out", &rendu.affichage, 28.0);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Champ lecture seule aligné à droite, façon écran de calculatrice.
    fn champ_ecran(ui: &mut egui::Ui, id: &str, contenu: &str, taille: f32) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(contenu).monospace().size(taille));
                    });
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Commande::*;
        use Operateur::*;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Remise à zéro totale", Touche::Commande(Effacer));
                self.bouton(ui, "⌫", "Efface le dernier chiffre", Touche::Commande(Retour));
                self.bouton(ui, "%", "Divise par cent", Touche::Commande(Pourcent));
                self.bouton(ui, "÷", "Division", Touche::Operateur(Division));
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton(ui, "×", "Multiplication", Touche::Operateur(Multiplication));
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton(ui, "−", "Soustraction", Touche::Operateur(Soustraction));
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton(ui, "+", "Addition", Touche::Operateur(Addition));
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                self.bouton(ui, "√", "Racine carrée", Touche::Commande(Racine));
                self.bouton(ui, "^", "Puissance", Touche::Operateur(Puissance));
                ui.end_row();
            });

        ui.add_space(4.0);

        // "=" large, sous le pavé
        let eq = ui.add_sized(
            [ui.available_width().min(242.0), 34.0],
            egui::Button::new("="),
        );
        if eq.clicked() {
            self.toucher(Touche::Commande(Commande::Egal));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([56.0, 34.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.toucher(touche);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized([56.0, 34.0], egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.toucher(Touche::Chiffre(c));
        }
    }

    /* ------------------------ Clavier ------------------------ */

    /// Saisie clavier : chiffres, point, + - * / ^ = % au fil du texte,
    /// plus Enter (égal) et Backspace (retour).
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let (egal, retour, textes) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                textes,
            )
        });

        if egal {
            self.toucher(Touche::Commande(Commande::Egal));
        }
        if retour {
            self.toucher(Touche::Commande(Commande::Retour));
        }
        for t in textes {
            for c in t.chars() {
                if let Some(touche) = Touche::depuis_caractere(c) {
                    self.toucher(touche);
                }
            }
        }
    }
}
