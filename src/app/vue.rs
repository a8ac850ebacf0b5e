// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, pavé 4 colonnes
// - Les boutons ne font que pousser une touche (la file est traitée dans app.rs)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::jetons::Operateur;
use crate::noyau::Touche;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_demarche(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.etat.affichage)
                            .monospace()
                            .size(36.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Operateur::*;

        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (ligne, op) in [([7, 8, 9], Div), ([4, 5, 6], Fois), ([1, 2, 3], Moins)] {
                    for d in ligne {
                        self.bouton(ui, &d.to_string(), Touche::Chiffre(d));
                    }
                    self.bouton(ui, op.glyphe(), Touche::Operateur(op));
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Chiffre(0));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                self.bouton(ui, Plus.glyphe(), Touche::Operateur(Plus));
                ui.end_row();

                self.bouton(ui, "C", Touche::Effacer);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let expression = self.etat.expression.to_string();
                let phase = format!("{:?}", self.etat.phase());
                let touche = self.etat.derniere_touche_txt();

                Self::champ(ui, "Expression", &expression);
                Self::champ(ui, "Phase", &phase);
                Self::champ(ui, "Dernière touche", &touche);
                Self::champ(ui, "Jetons", &self.demarche.jetons);
                Self::champ(ui, "RPN", &self.demarche.rpn);
            });
    }

    fn champ(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.horizontal(|ui| {
            ui.label(format!("{titre} :"));
            ui.monospace(contenu);
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
        if resp.clicked() {
            self.pousser(touche);
        }
    }
}
