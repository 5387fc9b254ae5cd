// src/stockage/historique.rs
//
// Historique des calculs : liste ordonnée, plus récent en tête, bornée à
// CAPACITE_HISTORIQUE entrées. Une insertion au-delà de la borne évince la
// plus ancienne. Les entrées sont immuables une fois créées.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{ecrire_emplacement, lire_emplacement, CLE_HISTORIQUE};

/// Borne dure : l'historique ne dépasse jamais cette taille.
pub const CAPACITE_HISTORIQUE: usize = 10;

/// Une entrée : l'expression telle que saisie, son résultat, et l'instant
/// du calcul (millisecondes epoch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: f64,
    pub horodatage: u64,
}

impl EntreeHistorique {
    pub fn nouvelle(expression: impl Into<String>, resultat: f64) -> Self {
        Self {
            expression: expression.into(),
            resultat,
            horodatage: maintenant_ms(),
        }
    }

    /// Variante à horodatage fixé (tests, rejeu).
    pub fn avec_horodatage(expression: impl Into<String>, resultat: f64, horodatage: u64) -> Self {
        Self {
            expression: expression.into(),
            resultat,
            horodatage,
        }
    }

    /// Ligne d'affichage "expression = résultat".
    pub fn affichage(&self) -> String {
        format!("{} = {}", self.expression, self.resultat)
    }
}

/// Millisecondes depuis l'epoch. SystemTime n'existe pas en wasm32 : on
/// passe par l'horloge JS côté web.
fn maintenant_ms() -> u64 {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Historique {
    // tête = plus récent
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Recharge depuis l'emplacement persisté (vide si absent/illisible).
    /// La borne est ré-appliquée à la lecture : un emplacement trop long
    /// (écrit par une autre version) est tronqué, pas rejeté.
    pub fn charger(stockage: &dyn eframe::Storage) -> Self {
        let entrees: Vec<EntreeHistorique> =
            lire_emplacement(stockage, CLE_HISTORIQUE).unwrap_or_default();
        let mut entrees: VecDeque<_> = entrees.into();
        entrees.truncate(CAPACITE_HISTORIQUE);
        Self { entrees }
    }

    /// Écrit l'état courant (best-effort), plus récent en tête.
    pub fn persister(&self, stockage: &mut dyn eframe::Storage) {
        let liste: Vec<&EntreeHistorique> = self.entrees.iter().collect();
        ecrire_emplacement(stockage, CLE_HISTORIQUE, &liste);
    }

    /// Insère une nouvelle entrée en tête ; évince la plus ancienne au-delà
    /// de la borne.
    pub fn enregistrer(&mut self, expression: &str, resultat: f64) {
        self.inserer(EntreeHistorique::nouvelle(expression, resultat));
    }

    pub fn inserer(&mut self, entree: EntreeHistorique) {
        self.entrees.push_front(entree);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    pub fn effacer(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Parcours du plus récent au plus ancien.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn plus_recente(&self) -> Option<&EntreeHistorique> {
        self.entrees.front()
    }
}
