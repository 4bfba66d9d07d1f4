// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (Backspace : géré par le champ lui-même)
// - Grille de touches fixe (etat::TOUCHES), focus redonné après clic
// - Fenêtres "History" et "Save" : présentation seulement

use eframe::egui;

use super::etat::{AppCalc, Statut, TOUCHES};
use crate::noyau::Action;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice scientifique");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(10.0);
        self.ui_clavier(ui);

        self.ui_statut(ui);

        let ctx = ui.ctx().clone();
        self.ui_fenetre_historique(&ctx);
        self.ui_fenetre_export(&ctx);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(self.session.entree_mut())
                .desired_width(ui.available_width())
                .horizontal_align(egui::Align::RIGHT)
                .font(egui::TextStyle::Heading)
                .id_salt("entree_edit"),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue ---
        // En singleline, Enter fait perdre le focus : on teste lost_focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.executer(Action::Evaluer);
        }
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("clavier_sci")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in TOUCHES {
                    for libelle in rangee {
                        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(libelle));
                        if resp.clicked() {
                            self.appuyer(libelle);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_statut(&self, ui: &mut egui::Ui) {
        let Some(statut) = &self.statut else {
            return;
        };
        ui.add_space(6.0);
        match statut {
            Statut::Info(msg) => {
                ui.label(msg);
            }
            Statut::Erreur(msg) => {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
        }
    }

    fn ui_fenetre_historique(&mut self, ctx: &egui::Context) {
        let mut ouverte = self.fenetre_historique;
        egui::Window::new("Calculation History")
            .open(&mut ouverte)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(260.0)
                    .show(ui, |ui| {
                        if self.session.historique().is_empty() {
                            ui.weak("(vide)");
                        }
                        for ligne in self.session.historique() {
                            ui.monospace(ligne);
                        }
                    });
            });
        self.fenetre_historique = ouverte;
    }

    fn ui_fenetre_export(&mut self, ctx: &egui::Context) {
        let mut ouverte = self.fenetre_export;
        let mut valider = false;
        egui::Window::new("Save History")
            .open(&mut ouverte)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Fichier (.txt) :");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.chemin_export)
                        .desired_width(280.0)
                        .id_salt("chemin_export"),
                );
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Save").clicked() || (resp.lost_focus() && enter) {
                    valider = true;
                }
            });
        // fenêtre fermée par la croix : pas d’export
        self.fenetre_export = ouverte;
        if valider {
            self.exporter();
        }
    }
}
