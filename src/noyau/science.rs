// src/noyau/science.rs
//
// Opérations scientifiques :
// - racine(x)        : racine carrée principale (x < 0 refusé)
// - puissance(a, b)  : a^b via powf, non fini refusé
// - pourcentage(txt) : évalue le texte via le noyau puis divise par 100
//
// puissance() est aussi la primitive utilisée par l'opérateur ^ du pipeline.

use super::erreurs::ErreurCalc;
use super::eval::{arrondi_8, evaluer};

/// Racine carrée principale. `RacineNegative` si x < 0.
pub fn racine(x: f64) -> Result<f64, ErreurCalc> {
    if x < 0.0 {
        return Err(ErreurCalc::RacineNegative);
    }
    Ok(arrondi_8(x.sqrt()))
}

/// a^b. `PuissanceInvalide` si le résultat mathématique n'est pas fini
/// (débordement, 0^-1, (-8)^0.5, ...).
pub fn puissance(base: f64, exposant: f64) -> Result<f64, ErreurCalc> {
    let v = base.powf(exposant);
    if !v.is_finite() {
        return Err(ErreurCalc::PuissanceInvalide);
    }
    Ok(v)
}

/// Évalue `texte` puis divise par 100. Les erreurs d'évaluation remontent
/// telles quelles ; un quotient non fini donne `PourcentageInvalide`.
pub fn pourcentage(texte: &str) -> Result<f64, ErreurCalc> {
    let v = evaluer(texte)? / 100.0;
    if !v.is_finite() {
        return Err(ErreurCalc::PourcentageInvalide);
    }
    Ok(arrondi_8(v))
}
