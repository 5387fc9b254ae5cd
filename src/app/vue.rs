// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : chiffres/opérateurs via événements texte, Enter évalue,
//   Backspace efface (Échap est géré au niveau app.rs)
// - Tactile : gros boutons, pavé 4 colonnes
// - La vue ne décide rien : chaque interaction appelle une méthode du
//   contrôleur (etat.rs), boutons et clavier passent par le même chemin.

use eframe::egui;

use super::etat::AppCalc;

/// Une touche de l'interface. Les caractères passent par les règles de
/// saisie ; le reste est une action directe.
#[derive(Clone, Copy, Debug)]
enum Touche {
    Caractere(char),
    Pi,
    Egal,
    Racine,
    Pourcentage,
    Effacer,
    RetourArriere,
    MemoirePlus,
    MemoireMoins,
    MemoireRappel,
    MemoireEffacer,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_affichage(ui, maintenant);

                ui.add_space(8.0);

                self.ui_touches(ui, maintenant);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);

                ui.add_space(8.0);

                self.ui_reglages(ui);
            });

        self.clavier(ui.ctx(), maintenant);
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Emphase d'erreur : le texte passe en couleur d'erreur tant que le
        // one-shot n'a pas expiré.
        let couleur = if self.flash_actif(maintenant) {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(1.6 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.label(
                    egui::RichText::new(self.affichage.as_str())
                        .monospace()
                        .size(22.0)
                        .color(couleur),
                );
            });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /* ------------------------ Touches ------------------------ */

    fn ui_touches(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Actions + scientifique
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "C", "Efface tout", Touche::Effacer, maintenant);
            self.bouton(
                ui,
                "DEL",
                "Efface le dernier caractère",
                Touche::RetourArriere,
                maintenant,
            );

            ui.separator();

            self.bouton(ui, "(", "", Touche::Caractere('('), maintenant);
            self.bouton(ui, ")", "", Touche::Caractere(')'), maintenant);
            self.bouton(ui, "^", "", Touche::Caractere('^'), maintenant);
            self.bouton(ui, "π", "", Touche::Pi, maintenant);

            ui.separator();

            self.bouton(
                ui,
                "√",
                "Racine carrée de l'expression courante",
                Touche::Racine,
                maintenant,
            );
            self.bouton(
                ui,
                "%",
                "Expression courante divisée par 100",
                Touche::Pourcentage,
                maintenant,
            );
        });

        // Mémoire
        ui.horizontal(|ui| {
            self.bouton(ui, "MC", "Efface la mémoire", Touche::MemoireEffacer, maintenant);
            self.bouton(ui, "MR", "Rappelle la mémoire", Touche::MemoireRappel, maintenant);
            self.bouton(ui, "M-", "Soustrait de la mémoire", Touche::MemoireMoins, maintenant);
            self.bouton(ui, "M+", "Ajoute à la mémoire", Touche::MemoirePlus, maintenant);

            if !self.memoire.est_vide() {
                ui.monospace(format!("M = {}", super::etat::formater_resultat(self.memoire.valeur())));
            }
        });

        ui.add_space(4.0);

        // Pavé numérique
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", "", Touche::Caractere('7'), maintenant);
                self.bouton(ui, "8", "", Touche::Caractere('8'), maintenant);
                self.bouton(ui, "9", "", Touche::Caractere('9'), maintenant);
                self.bouton(ui, "/", "", Touche::Caractere('/'), maintenant);
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Caractere('4'), maintenant);
                self.bouton(ui, "5", "", Touche::Caractere('5'), maintenant);
                self.bouton(ui, "6", "", Touche::Caractere('6'), maintenant);
                self.bouton(ui, "*", "", Touche::Caractere('*'), maintenant);
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Caractere('1'), maintenant);
                self.bouton(ui, "2", "", Touche::Caractere('2'), maintenant);
                self.bouton(ui, "3", "", Touche::Caractere('3'), maintenant);
                self.bouton(ui, "-", "", Touche::Caractere('-'), maintenant);
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Caractere('0'), maintenant);
                self.bouton(ui, ".", "", Touche::Caractere('.'), maintenant);
                self.bouton(ui, "=", "Évalue l'expression", Touche::Egal, maintenant);
                self.bouton(ui, "+", "", Touche::Caractere('+'), maintenant);
                ui.end_row();
            });
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        etiquette: &str,
        astuce: &str,
        touche: Touche,
        maintenant: f64,
    ) {
        let mut resp = ui.add_sized([52.0, 32.0], egui::Button::new(etiquette));
        if !astuce.is_empty() {
            resp = resp.on_hover_text(astuce);
        }
        if resp.clicked() {
            self.activer(touche, maintenant);
        }
    }

    fn activer(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Caractere(c) => self.saisir_touche(c, maintenant),
            Touche::Pi => self.inserer_pi(),
            Touche::Egal => self.evaluer_egal(maintenant),
            Touche::Racine => self.appliquer_racine(maintenant),
            Touche::Pourcentage => self.appliquer_pourcentage(maintenant),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::MemoirePlus => self.memoire_plus(maintenant),
            Touche::MemoireMoins => self.memoire_moins(maintenant),
            Touche::MemoireRappel => self.memoire_rappel(),
            Touche::MemoireEffacer => self.memoire_effacer(),
        }
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.est_vide() {
                    ui.monospace("aucun calcul");
                    return;
                }

                // plus récent en tête
                for entree in self.historique.iter() {
                    ui.monospace(entree.affichage());
                }

                ui.add_space(4.0);
                if ui.button("Effacer l'historique").clicked() {
                    self.historique.effacer();
                }
            });
    }

    /* ------------------------ Réglages ------------------------ */

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let etiquette = format!("Thème : {}", self.reglages.theme.etiquette());
            if ui.button(etiquette).on_hover_text("Bascule clair/sombre").clicked() {
                self.basculer_theme();
            }

            ui.separator();

            ui.checkbox(&mut self.reglages.son_actif, "Son");
        });
    }

    /* ------------------------ Clavier ------------------------ */

    /// Les touches clavier passent par la même machine de saisie que les
    /// boutons : aucun second chemin de code.
    fn clavier(&mut self, ctx: &egui::Context, maintenant: f64) {
        let evenements = ctx.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.saisir_touche(c, maintenant);
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.evaluer_egal(maintenant),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.retour_arriere(),
                _ => {}
            }
        }
    }
}
