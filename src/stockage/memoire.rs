// src/stockage/memoire.rs
//
// Cellule mémoire : un seul f64, accumulateur entre deux calculs.
// M+ / M- mutent sur place, MC remet à zéro, MR lit.

use serde::{Deserialize, Serialize};

use super::{ecrire_emplacement, lire_emplacement, CLE_MEMOIRE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    /// Recharge depuis l'emplacement persisté (zéro si absent/illisible).
    pub fn charger(stockage: &dyn eframe::Storage) -> Self {
        lire_emplacement(stockage, CLE_MEMOIRE).unwrap_or_default()
    }

    /// Écrit l'état courant (best-effort).
    pub fn persister(&self, stockage: &mut dyn eframe::Storage) {
        ecrire_emplacement(stockage, CLE_MEMOIRE, self);
    }

    pub fn ajouter(&mut self, v: f64) {
        self.valeur += v;
    }

    pub fn soustraire(&mut self, v: f64) {
        self.valeur -= v;
    }

    pub fn effacer(&mut self) {
        self.valeur = 0.0;
    }

    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    /// Vrai si la cellule est à zéro (rien à rappeler).
    pub fn est_vide(&self) -> bool {
        self.valeur == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::Memoire;

    #[test]
    fn accumulateur() {
        let mut m = Memoire::default();
        assert!(m.est_vide());

        m.ajouter(10.0);
        m.ajouter(2.5);
        assert_eq!(m.valeur(), 12.5);

        m.soustraire(2.5);
        assert_eq!(m.valeur(), 10.0);

        m.effacer();
        assert!(m.est_vide());
    }

    #[test]
    fn json_transparent() {
        // la cellule se sérialise comme un simple nombre
        let mut m = Memoire::default();
        m.ajouter(42.5);

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "42.5");

        let relu: Memoire = serde_json::from_str(&json).unwrap();
        assert_eq!(relu, m);
    }
}
