// src/stockage/reglages.rs
//
// Réglages d'interface : thème (clair/sombre) et son (actif/coupé).
// Deux scalaires, deux emplacements persistés distincts, chargés au
// démarrage et réécrits à chaque sauvegarde.

use eframe::egui;
use serde::{Deserialize, Serialize};

use super::{ecrire_emplacement, lire_emplacement, CLE_SON, CLE_THEME};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Clair,
    #[default]
    Sombre,
}

impl Theme {
    /// Visuels egui correspondants.
    pub fn visuels(self) -> egui::Visuals {
        match self {
            Theme::Clair => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
        }
    }

    pub fn basculer(&mut self) {
        *self = match self {
            Theme::Clair => Theme::Sombre,
            Theme::Sombre => Theme::Clair,
        };
    }

    pub fn etiquette(self) -> &'static str {
        match self {
            Theme::Clair => "clair",
            Theme::Sombre => "sombre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reglages {
    pub theme: Theme,
    pub son_actif: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            son_actif: true,
        }
    }
}

impl Reglages {
    /// Recharge thème et son depuis leurs emplacements respectifs.
    pub fn charger(stockage: &dyn eframe::Storage) -> Self {
        let defauts = Self::default();
        Self {
            theme: lire_emplacement(stockage, CLE_THEME).unwrap_or(defauts.theme),
            son_actif: lire_emplacement(stockage, CLE_SON).unwrap_or(defauts.son_actif),
        }
    }

    /// Écrit les deux emplacements (best-effort).
    pub fn persister(&self, stockage: &mut dyn eframe::Storage) {
        ecrire_emplacement(stockage, CLE_THEME, &self.theme);
        ecrire_emplacement(stockage, CLE_SON, &self.son_actif);
    }
}
