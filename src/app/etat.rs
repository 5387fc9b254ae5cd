//! src/app/etat.rs
//!
//! État UI et machine de saisie (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (affichage, erreur, historique,
//! mémoire, réglages) et appliquer les règles de saisie, touche par touche.
//!
//! Contrats :
//! - Toute évaluation passe par le noyau ; aucune erreur ne sort d'ici,
//!   tout devient marqueur + message + emphase temporisée.
//! - Actions déterministes ; la persistance et le son sont des effets
//!   best-effort qui ne changent jamais le résultat d'une action.
//! - L'horloge est injectée (secondes egui) : pas d'Instant, qui n'existe
//!   pas en wasm32.

use crate::noyau::{self, ErreurCalc};
use crate::stockage::{Historique, Memoire, Reglages};

use super::son::{CategorieSon, LecteurSon};

/// Contenu de l'affichage quand une évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Erreur";

/// Durée de l'emphase visuelle d'erreur (secondes).
const DUREE_FLASH: f64 = 1.5;

/// Les cinq opérateurs saisissables.
const OPERATEURS: [char; 5] = ['+', '-', '*', '/', '^'];

#[derive(Debug)]
pub struct AppCalc {
    // --- affichage ---
    pub affichage: String,
    pub erreur: String,   // message détaillé (vide si pas d'erreur)
    erreur_affichee: bool, // l'affichage contient le marqueur
    flash_fin: Option<f64>, // fin de l'emphase (horloge egui, secondes)

    // --- états persistants ---
    pub historique: Historique,
    pub memoire: Memoire,
    pub reglages: Reglages,

    // --- sortie audio ---
    son: LecteurSon,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            erreur: String::new(),
            erreur_affichee: false,
            flash_fin: None,
            historique: Historique::default(),
            memoire: Memoire::default(),
            reglages: Reglages::default(),
            son: LecteurSon::default(),
        }
    }
}

/// Formatage d'un résultat pour l'affichage : forme décimale la plus courte,
/// "-0" normalisé en "0".
pub fn formater_resultat(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

impl AppCalc {
    /* ------------------------ Cycle de vie ------------------------ */

    /// Construit l'état initial, rechargé depuis le stockage s'il existe.
    pub fn nouveau(stockage: Option<&dyn eframe::Storage>) -> Self {
        let mut calc = Self::default();
        if let Some(s) = stockage {
            calc.memoire = Memoire::charger(s);
            calc.historique = Historique::charger(s);
            calc.reglages = Reglages::charger(s);
        }
        calc
    }

    /// Réécrit les quatre emplacements persistés (best-effort).
    pub fn persister(&self, stockage: &mut dyn eframe::Storage) {
        self.memoire.persister(stockage);
        self.historique.persister(stockage);
        self.reglages.persister(stockage);
    }

    /// À appeler chaque frame : expire l'emphase d'erreur. One-shot non
    /// annulable : seul l'écoulement du délai l'éteint.
    pub fn tic(&mut self, maintenant: f64) {
        if matches!(self.flash_fin, Some(fin) if maintenant >= fin) {
            self.flash_fin = None;
        }
    }

    /// Emphase visible ? (marqueur affiché ET délai non écoulé)
    pub fn flash_actif(&self, maintenant: f64) -> bool {
        self.erreur_affichee && matches!(self.flash_fin, Some(fin) if maintenant < fin)
    }

    /// Secondes restantes d'emphase, pour planifier un re-rendu.
    pub fn flash_restant(&self, maintenant: f64) -> Option<f64> {
        self.flash_fin.map(|fin| (fin - maintenant).max(0.0))
    }

    /* ------------------------ Saisie ------------------------ */

    /// Dispatch clavier : une touche texte vers la bonne règle de saisie.
    /// Les caractères hors langage sont ignorés sans bruit.
    pub fn saisir_touche(&mut self, c: char, maintenant: f64) {
        match c {
            '0'..='9' | '.' => self.saisir_chiffre(c),
            '+' | '-' | '*' | '/' | '^' => self.saisir_operateur(c),
            '(' | ')' => self.saisir_parenthese(c),
            '=' => self.evaluer_egal(maintenant),
            _ => {}
        }
    }

    /// Chiffre ou point : ajouté à l'affichage ; si l'affichage montre le
    /// marqueur d'erreur, le chiffre le remplace entièrement.
    pub fn saisir_chiffre(&mut self, c: char) {
        self.reinitialiser_si_erreur();
        self.affichage.push(c);
        self.jouer(CategorieSon::Chiffre);
    }

    /// Opérateur : ajouté, sauf
    /// (a) affichage vide : seul le moins unaire est accepté,
    /// (b) opérateur après opérateur : remplacement, pas d'empilement.
    pub fn saisir_operateur(&mut self, op: char) {
        if !OPERATEURS.contains(&op) {
            return;
        }
        self.reinitialiser_si_erreur();

        if self.affichage.ends_with(&OPERATEURS[..]) {
            self.affichage.pop();
        }
        // la règle "vide" s'applique aussi après un remplacement qui vide
        if self.affichage.is_empty() && op != '-' {
            return;
        }

        self.affichage.push(op);
        self.jouer(CategorieSon::Operateur);
    }

    pub fn saisir_parenthese(&mut self, c: char) {
        self.reinitialiser_si_erreur();
        self.affichage.push(c);
        self.jouer(CategorieSon::Operateur);
    }

    /// Insère la constante π (sous sa forme texte "pi").
    pub fn inserer_pi(&mut self) {
        self.reinitialiser_si_erreur();
        self.affichage.push_str("pi");
        self.jouer(CategorieSon::Chiffre);
    }

    /// Efface tout (affichage + erreur).
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.erreur.clear();
        self.erreur_affichee = false;
        self.jouer(CategorieSon::Effacement);
    }

    /// Retire le dernier caractère ; sur le marqueur d'erreur, efface tout.
    pub fn retour_arriere(&mut self) {
        if self.erreur_affichee {
            self.effacer();
            return;
        }
        self.affichage.pop();
        self.jouer(CategorieSon::Effacement);
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Touche "=" : évalue l'affichage. Succès => entrée d'historique +
    /// résultat affiché ; échec => marqueur + emphase temporisée.
    pub fn evaluer_egal(&mut self, maintenant: f64) {
        match noyau::evaluer(&self.affichage) {
            Ok(v) => {
                self.historique.enregistrer(self.affichage.trim(), v);
                self.afficher_resultat(v);
                self.jouer(CategorieSon::Egal);
            }
            Err(e) => self.signaler_erreur(e, maintenant),
        }
    }

    /// Touche "√" : évalue l'affichage puis prend la racine.
    pub fn appliquer_racine(&mut self, maintenant: f64) {
        let expression = self.affichage.trim().to_string();
        match noyau::evaluer(&expression).and_then(noyau::racine) {
            Ok(v) => {
                self.historique.enregistrer(&format!("√({expression})"), v);
                self.afficher_resultat(v);
                self.jouer(CategorieSon::Egal);
            }
            Err(e) => self.signaler_erreur(e, maintenant),
        }
    }

    /// Touche "%" : évalue l'affichage puis divise par 100.
    pub fn appliquer_pourcentage(&mut self, maintenant: f64) {
        let expression = self.affichage.trim().to_string();
        match noyau::pourcentage(&expression) {
            Ok(v) => {
                self.historique.enregistrer(&format!("({expression})%"), v);
                self.afficher_resultat(v);
                self.jouer(CategorieSon::Egal);
            }
            Err(e) => self.signaler_erreur(e, maintenant),
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    /// M+ : évalue l'affichage et l'ajoute à la cellule mémoire.
    pub fn memoire_plus(&mut self, maintenant: f64) {
        match noyau::evaluer(&self.affichage) {
            Ok(v) => {
                self.memoire.ajouter(v);
                self.jouer(CategorieSon::Memoire);
            }
            Err(e) => self.signaler_erreur(e, maintenant),
        }
    }

    /// M- : évalue l'affichage et le soustrait de la cellule mémoire.
    pub fn memoire_moins(&mut self, maintenant: f64) {
        match noyau::evaluer(&self.affichage) {
            Ok(v) => {
                self.memoire.soustraire(v);
                self.jouer(CategorieSon::Memoire);
            }
            Err(e) => self.signaler_erreur(e, maintenant),
        }
    }

    /// MR : remplace l'affichage par la valeur mémorisée.
    pub fn memoire_rappel(&mut self) {
        self.reinitialiser_si_erreur();
        self.affichage = formater_resultat(self.memoire.valeur());
        self.jouer(CategorieSon::Memoire);
    }

    /// MC : remet la cellule mémoire à zéro.
    pub fn memoire_effacer(&mut self) {
        self.memoire.effacer();
        self.jouer(CategorieSon::Memoire);
    }

    /* ------------------------ Réglages ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.reglages.theme.basculer();
    }

    pub fn basculer_son(&mut self) {
        self.reglages.son_actif = !self.reglages.son_actif;
    }

    /* ------------------------ Internes ------------------------ */

    /// Dépose un résultat : remplace l'affichage, nettoie l'erreur.
    fn afficher_resultat(&mut self, v: f64) {
        self.affichage = formater_resultat(v);
        self.erreur.clear();
        self.erreur_affichee = false;
    }

    /// Dépose une erreur : marqueur + message + emphase temporisée.
    fn signaler_erreur(&mut self, e: ErreurCalc, maintenant: f64) {
        log::debug!("évaluation refusée ({:?}) : {e}", self.affichage);
        self.affichage = MARQUEUR_ERREUR.to_string();
        self.erreur = e.to_string();
        self.erreur_affichee = true;
        self.flash_fin = Some(maintenant + DUREE_FLASH);
        self.jouer(CategorieSon::Erreur);
    }

    /// Si l'affichage montre le marqueur, repartir de zéro avant la saisie.
    fn reinitialiser_si_erreur(&mut self) {
        if self.erreur_affichee {
            self.affichage.clear();
            self.erreur.clear();
            self.erreur_affichee = false;
        }
    }

    /// Bip de la catégorie, coupé si le réglage son est inactif.
    fn jouer(&mut self, categorie: CategorieSon) {
        if self.reglages.son_actif {
            self.son.jouer(categorie);
        }
    }
}
