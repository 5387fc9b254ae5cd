// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> f64
// Objectif :
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis replier la RPN en un seul f64
//
// Règles :
// - Précédences : + - (1) < * / (2) < ^ (3), ^ associatif à droite
// - Moins unaire : '-' quand on n'attend PAS une valeur devient Op::Neg,
//   empilé sans dépiler (préfixe : il ne concurrence pas les opérateurs à
//   sa gauche). Neg se fait dépiler comme * et / (précédence 2), donc
//   -5^2 = -(5^2) mais -2*3 = (-2)*3.
// - Chaque opération est vérifiée : diviseur nul => DivisionParZero,
//   valeur non finie => ResultatInvalide (PuissanceInvalide pour ^).

use super::erreurs::ErreurCalc;
use super::jetons::Jeton;
use super::science;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Plus,
    Moins,
    Etoile,
    Barre,
    Accent,
    Neg,  // moins unaire
    ParG, // uniquement sur la pile d'opérateurs, jamais émis en RPN
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rpn {
    Nombre(f64),
    Pi,
    Operateur(Op),
}

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Etoile | Op::Barre | Op::Neg => 2,
        Op::Accent => 3,
        Op::ParG => 0,
    }
}

fn associatif_droite(op: Op) -> bool {
    matches!(op, Op::Accent | Op::Neg)
}

/// Dépile vers `out` tant que la précédence/associativité l'exige.
fn depiler_selon_precedence(ops: &mut Vec<Op>, out: &mut Vec<Rpn>, entrant: Op) {
    while let Some(&haut) = ops.last() {
        if haut == Op::ParG {
            break;
        }

        let doit_sortir = if associatif_droite(entrant) {
            precedence(haut) > precedence(entrant)
        } else {
            precedence(haut) >= precedence(entrant)
        };

        if doit_sortir {
            out.push(Rpn::Operateur(haut));
            ops.pop();
        } else {
            break;
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple :
///   jetons : [Nombre(2), Etoile, Moins, Nombre(3)]
///   rpn    : [Nombre(2), Nombre(3), Neg, Etoile]
///
/// Le contrôle d'appariement des parenthèses est fait en amont (eval.rs) ;
/// on garde néanmoins les erreurs ici pour que la fonction reste sûre seule.
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Rpn>, ErreurCalc> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à distinguer moins unaire et moins binaire.
    let mut prev_etait_valeur = false;

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(v) => {
                out.push(Rpn::Nombre(v));
                prev_etait_valeur = true;
            }
            Jeton::Pi => {
                out.push(Rpn::Pi);
                prev_etait_valeur = true;
            }

            Jeton::ParG => {
                ops.push(Op::ParG);
                prev_etait_valeur = false;
            }

            Jeton::ParD => {
                // dépile jusqu'à '('
                loop {
                    match ops.pop() {
                        Some(Op::ParG) => break,
                        Some(op) => out.push(Rpn::Operateur(op)),
                        None => return Err(ErreurCalc::ParenthesesNonAppariees),
                    }
                }
                prev_etait_valeur = true;
            }

            Jeton::Plus | Jeton::Etoile | Jeton::Barre | Jeton::Accent => {
                // opérateur binaire sans opérande gauche : "*5", "(+2)"…
                if !prev_etait_valeur {
                    return Err(ErreurCalc::ExpressionInvalide);
                }

                let op = match jeton {
                    Jeton::Plus => Op::Plus,
                    Jeton::Etoile => Op::Etoile,
                    Jeton::Barre => Op::Barre,
                    Jeton::Accent => Op::Accent,
                    _ => unreachable!(),
                };

                depiler_selon_precedence(&mut ops, &mut out, op);
                ops.push(op);
                prev_etait_valeur = false;
            }

            Jeton::Moins => {
                if prev_etait_valeur {
                    depiler_selon_precedence(&mut ops, &mut out, Op::Moins);
                    ops.push(Op::Moins);
                } else {
                    // préfixe : empilé tel quel, sortira après son opérande
                    ops.push(Op::Neg);
                }
                prev_etait_valeur = false;
            }
        }
    }

    // vide la pile d'opérateurs
    while let Some(op) = ops.pop() {
        if op == Op::ParG {
            return Err(ErreurCalc::ParenthesesNonAppariees);
        }
        out.push(Rpn::Operateur(op));
    }

    Ok(out)
}

/// Replie une RPN en un seul f64.
///
/// Chaque opération est contrôlée au vol : diviseur nul et valeurs non
/// finies sont rejetés ici, pas en bout de pipeline.
pub fn eval_rpn(rpn: &[Rpn]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for r in rpn.iter().copied() {
        match r {
            Rpn::Nombre(v) => pile.push(v),
            Rpn::Pi => pile.push(std::f64::consts::PI),

            Rpn::Operateur(Op::Neg) => {
                let x = pile.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                pile.push(-x);
            }

            Rpn::Operateur(Op::ParG) => return Err(ErreurCalc::ExpressionInvalide),

            Rpn::Operateur(op) => {
                let b = pile.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurCalc::ExpressionInvalide)?;

                let v = match op {
                    Op::Plus => a + b,
                    Op::Moins => a - b,
                    Op::Etoile => a * b,
                    Op::Barre => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    Op::Accent => science::puissance(a, b)?,
                    Op::Neg | Op::ParG => unreachable!(),
                };

                if !v.is_finite() {
                    return Err(ErreurCalc::ResultatInvalide);
                }
                pile.push(v);
            }
        }
    }

    // exactement une valeur : sinon opérandes adjacents ("2 3") ou opérateur
    // en trop ("2+")
    if pile.len() != 1 {
        return Err(ErreurCalc::ExpressionInvalide);
    }
    Ok(pile[0])
}

#[cfg(test)]
mod tests {
    use super::{eval_rpn, to_rpn};
    use crate::noyau::erreurs::ErreurCalc;
    use crate::noyau::jetons::tokenize;

    fn calcule(s: &str) -> Result<f64, ErreurCalc> {
        eval_rpn(&to_rpn(&tokenize(s).expect("tokenize"))?)
    }

    fn ok(s: &str) -> f64 {
        calcule(s).unwrap_or_else(|e| panic!("calcule({s:?}) erreur : {e}"))
    }

    #[test]
    fn precedence_classique() {
        assert_eq!(ok("2+3*4"), 14.0);
        assert_eq!(ok("2*3+4"), 10.0);
        assert_eq!(ok("(2+3)*4"), 20.0);
        assert_eq!(ok("20-4/2"), 18.0);
    }

    #[test]
    fn accent_associatif_a_droite() {
        // 2^3^2 = 2^(3^2) = 512, pas (2^3)^2 = 64
        assert_eq!(ok("2^3^2"), 512.0);
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(ok("-5"), -5.0);
        assert_eq!(ok("--5"), 5.0);
        assert_eq!(ok("2*-3"), -6.0);
        assert_eq!(ok("2^-1"), 0.5);
        assert_eq!(ok("-(2+3)"), -5.0);
        // le moins unaire lie moins fort que ^
        assert_eq!(ok("-5^2"), -25.0);
    }

    #[test]
    fn division_par_zero_au_vol() {
        assert_eq!(calcule("5/0"), Err(ErreurCalc::DivisionParZero));
        assert_eq!(calcule("5/(0)"), Err(ErreurCalc::DivisionParZero));
        assert_eq!(calcule("5/(2-2)"), Err(ErreurCalc::DivisionParZero));
        assert_eq!(calcule("1/(1/0)"), Err(ErreurCalc::DivisionParZero));
    }

    #[test]
    fn parentheses_mal_appariees() {
        assert_eq!(calcule("(2+3"), Err(ErreurCalc::ParenthesesNonAppariees));
        assert_eq!(calcule("2+3)"), Err(ErreurCalc::ParenthesesNonAppariees));
    }

    #[test]
    fn structures_invalides() {
        assert_eq!(calcule("2 3"), Err(ErreurCalc::ExpressionInvalide));
        assert_eq!(calcule("2+"), Err(ErreurCalc::ExpressionInvalide));
        assert_eq!(calcule("*5"), Err(ErreurCalc::ExpressionInvalide));
        assert_eq!(calcule("()"), Err(ErreurCalc::ExpressionInvalide));
        assert_eq!(calcule("2 pi"), Err(ErreurCalc::ExpressionInvalide));
    }

    #[test]
    fn debordement_detecte() {
        // 1e308 s'écrit sans notation scientifique : 1 suivi de 308 zéros
        let grand = format!("1{}", "0".repeat(308));
        assert_eq!(
            calcule(&format!("{grand}+{grand}")),
            Err(ErreurCalc::ResultatInvalide)
        );
        assert_eq!(
            calcule(&format!("{grand}*10")),
            Err(ErreurCalc::ResultatInvalide)
        );
    }
}
