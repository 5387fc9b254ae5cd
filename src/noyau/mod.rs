//! Noyau calculatrice
//!
//! Organisation interne :
//! - erreurs.rs : taxonomie ErreurCalc
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard + repli f64
//! - eval.rs    : pipeline complet + arrondi
//! - science.rs : racine, puissance, pourcentage

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod science;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{arrondi_8, evaluer};
pub use science::{pourcentage, puissance, racine};
