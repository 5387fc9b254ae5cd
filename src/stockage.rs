// src/stockage.rs
//
// Persistance — module racine
// ---------------------------
// Quatre emplacements clé/valeur indépendants (eframe::Storage : fichier en
// natif, localStorage en web), un par état persistant :
// - mémoire     (accumulateur f64)
// - historique  (liste bornée d'entrées)
// - thème       (clair / sombre)
// - son         (actif / coupé)
//
// Contrat best-effort : une panne de persistance est journalisée, jamais
// remontée à l'utilisateur, jamais mêlée aux erreurs d'évaluation.

pub mod historique;
pub mod memoire;
pub mod reglages;

pub use historique::{EntreeHistorique, Historique, CAPACITE_HISTORIQUE};
pub use memoire::Memoire;
pub use reglages::{Reglages, Theme};

/// Clés des quatre emplacements persistés.
pub const CLE_MEMOIRE: &str = "calculatrice.memoire";
pub const CLE_HISTORIQUE: &str = "calculatrice.historique";
pub const CLE_THEME: &str = "calculatrice.theme";
pub const CLE_SON: &str = "calculatrice.son";

/// Lit et désérialise un emplacement. Absent ou illisible => None (et on
/// journalise l'illisible : c'est un état corrompu, pas un premier démarrage).
pub(crate) fn lire_emplacement<T: serde::de::DeserializeOwned>(
    stockage: &dyn eframe::Storage,
    cle: &str,
) -> Option<T> {
    let texte = stockage.get_string(cle)?;
    match serde_json::from_str(&texte) {
        Ok(valeur) => Some(valeur),
        Err(e) => {
            log::warn!("emplacement {cle} illisible, valeur par défaut utilisée : {e}");
            None
        }
    }
}

/// Sérialise et écrit un emplacement, sans jamais échouer côté appelant.
pub(crate) fn ecrire_emplacement<T: serde::Serialize>(
    stockage: &mut dyn eframe::Storage,
    cle: &str,
    valeur: &T,
) {
    match serde_json::to_string(valeur) {
        Ok(texte) => stockage.set_string(cle, texte),
        Err(e) => log::warn!("sérialisation de {cle} impossible : {e}"),
    }
}
