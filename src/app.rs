// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle :
// - Déclarer les sous-modules (etat.rs + vue.rs + son.rs)
// - Ré-exporter AppCalc (pour main.rs : use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB) : rendu, expiration
//   de l'emphase d'erreur, et sauvegarde périodique des quatre emplacements
//
// Important :
// - Enter/Backspace/texte sont gérés dans vue.rs ; ici seulement Échap
//   (effacer) et l'orchestration par frame.

pub mod etat;
pub mod son;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // One-shot d'emphase : expire tout seul, personne ne l'annule.
        self.tic(maintenant);
        if let Some(restant) = self.flash_restant(maintenant) {
            // re-rendu garanti à l'échéance, même sans événement d'entrée
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(restant.max(0.01)));
        }

        // Le thème est un réglage persistant : appliqué chaque frame.
        ctx.set_visuals(self.reglages.theme.visuels());

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = tout effacer (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    // Persistance best-effort : eframe appelle save() périodiquement et à la
    // fermeture (localStorage côté web, fichier côté natif).
    fn save(&mut self, stockage: &mut dyn eframe::Storage) {
        self.persister(stockage);
    }
}
