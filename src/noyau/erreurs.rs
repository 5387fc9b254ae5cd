// src/noyau/erreurs.rs
//
// Taxonomie des erreurs d'évaluation.
// - Une variante par cause, message court affichable tel quel dans l'UI.
// - Aucune erreur n'est fatale : tout est rattrapé au niveau du contrôleur.

use thiserror::Error;

/// Erreurs du noyau (évaluation + opérations scientifiques).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère invalide : '{0}'")]
    CaractereInvalide(char),

    #[error("trop d'opérateurs puissance")]
    TropDePuissances,

    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("résultat non représentable")]
    ResultatInvalide,

    #[error("racine d'un nombre négatif")]
    RacineNegative,

    #[error("puissance invalide")]
    PuissanceInvalide,

    #[error("pourcentage invalide")]
    PourcentageInvalide,
}
