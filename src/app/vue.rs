// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : pavé 0-9 + - * /, focus redonné après clic (focus_entree)
// - Case "strict" : politique de jetons du noyau

use eframe::egui;

use calculatrice_infixe::noyau::config::DIGITS_MAX;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice infixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, 20/2/2, 7/2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + refus + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut strict = self.est_strict();
            if ui
                .checkbox(&mut strict, "strict")
                .on_hover_text("Refuse tout caractère hors chiffres, + - * / et espaces")
                .changed()
            {
                self.set_strict(strict);
            }

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.config.digits() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.config.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.refus.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.refus);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_infixe")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9", "/"], ["4", "5", "6", "*"], ["1", "2", "3", "-"]] {
                    for t in ligne {
                        self.bouton_insert(ui, t);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.evaluer();
                }
                self.bouton_insert(ui, "+");
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 1);

        ui.add_space(6.0);

        ui.label("Lecture décimale :");
        if self.lecture.is_empty() {
            ui.monospace("indisponible");
        } else {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 1);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                if !self.demarche.genre_echec.is_empty() {
                    Self::champ_demarche(ui, "Échec", "demarche_echec", &self.demarche.genre_echec);
                    return;
                }
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Réductions", "demarche_etapes", &self.demarche.etapes);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    /// Chiffres collés, opérateurs entourés d’espaces (lisible, accepté en strict).
    fn bouton_insert(&mut self, ui: &mut egui::Ui, t: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(t));
        if !resp.clicked() {
            return;
        }

        if t.chars().all(|c| c.is_ascii_digit()) {
            self.entree.push_str(t);
        } else {
            while self.entree.ends_with(' ') {
                self.entree.pop();
            }
            if !self.entree.is_empty() {
                self.entree.push(' ');
            }
            self.entree.push_str(t);
            self.entree.push(' ');
        }

        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
