//! Noyau — évaluation (pipeline réel)
//!
//! entrée vide -> borne ^ -> tokenize -> compteur parenthèses -> RPN
//!        -> repli f64 -> arrondi 8 décimales
//!
//! Remarque : l'appariement des parenthèses est contrôlé par compteur AVANT
//! le parse, pour que "(+" soit signalé comme parenthèse non appariée et non
//! comme expression invalide. L'ordre des contrôles fait partie du contrat.

use super::erreurs::ErreurCalc;
use super::jetons::{tokenize, Jeton};
use super::rpn::{eval_rpn, to_rpn};

/// Borne sur le nombre d'opérateurs `^` acceptés dans une même expression.
pub const MAX_PUISSANCES: usize = 10;

/// API publique : évalue une expression arithmétique et retourne sa valeur,
/// arrondie à 8 décimales (anti-bruit binaire du f64).
///
/// Tout-ou-rien : soit une valeur finie, soit une ErreurCalc. Jamais de
/// résultat partiel.
pub fn evaluer(texte: &str) -> Result<f64, ErreurCalc> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    // 1) Borne sur ^ (garde-fou d'entrée, pas de limite à l'exécution)
    if s.matches('^').count() > MAX_PUISSANCES {
        return Err(ErreurCalc::TropDePuissances);
    }

    // 2) Jetons (liste blanche de caractères)
    let jetons = tokenize(s)?;

    // 3) Compteur de parenthèses : négatif ou non nul en fin => rejet
    verifier_parentheses(&jetons)?;

    // 4) RPN puis repli
    let rpn = to_rpn(&jetons)?;
    let brut = eval_rpn(&rpn)?;

    // 5) Arrondi final
    Ok(arrondi_8(brut))
}

/// Compteur simple : +1 sur '(', -1 sur ')', jamais négatif, nul à la fin.
fn verifier_parentheses(jetons: &[Jeton]) -> Result<(), ErreurCalc> {
    let mut profondeur: i32 = 0;
    for j in jetons {
        match j {
            Jeton::ParG => profondeur += 1,
            Jeton::ParD => {
                profondeur -= 1;
                if profondeur < 0 {
                    return Err(ErreurCalc::ParenthesesNonAppariees);
                }
            }
            _ => {}
        }
    }
    if profondeur != 0 {
        return Err(ErreurCalc::ParenthesesNonAppariees);
    }
    Ok(())
}

/// Arrondi à 8 décimales. Laisse passer tel quel ce qui ne survit pas au
/// changement d'échelle (très grandes valeurs : l'arrondi y est l'identité).
pub fn arrondi_8(v: f64) -> f64 {
    let echelle = v * 1e8;
    if echelle.is_finite() {
        echelle.round() / 1e8
    } else {
        v
    }
}
