// src/noyau/jetons.rs
//
// Tokenisation du langage calculatrice :
// - nombres décimaux (12, 3.5, .5)
// - opérateurs + - * / ^
// - parenthèses ( )
// - π ou pi (insensible à la casse)
//
// Tout caractère hors de cette liste blanche est rejeté (CaractereInvalide).

use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Pi,

    Plus,
    Moins,
    Etoile,
    Barre,
    Accent, // ^

    ParG,
    ParD,
}

/// Tokenize une chaîne en jetons.
///
/// Les espaces sont ignorés. Le point décimal accepte la forme ".5" (zéro
/// implicite). "pi" / "PI" / 'π' donnent le jeton Pi.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Etoile);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Barre);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Accent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // π : "π" ou "pi" / "PI"
        if c == 'π' {
            out.push(Jeton::Pi);
            i += 1;
            continue;
        }
        if (c == 'p' || c == 'P')
            && i + 1 < chars.len()
            && (chars[i + 1] == 'i' || chars[i + 1] == 'I')
        {
            out.push(Jeton::Pi);
            i += 2;
            continue;
        }

        // Nombre décimal : chiffres, puis éventuellement '.' + chiffres.
        // ".5" est accepté (point en tête).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            let texte: String = chars[start..i].iter().collect();

            // "." seul : dans la liste blanche, mais pas un nombre.
            let v: f64 = texte.parse().map_err(|_| ErreurCalc::ExpressionInvalide)?;
            out.push(Jeton::Nombre(v));
            continue;
        }

        return Err(ErreurCalc::CaractereInvalide(c));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Jeton};
    use crate::noyau::erreurs::ErreurCalc;

    fn jetons_ok(s: &str) -> Vec<Jeton> {
        tokenize(s).unwrap_or_else(|e| panic!("tokenize({s:?}) erreur : {e}"))
    }

    #[test]
    fn nombres_simples() {
        assert_eq!(jetons_ok("12"), vec![Jeton::Nombre(12.0)]);
        assert_eq!(jetons_ok("3.5"), vec![Jeton::Nombre(3.5)]);
        assert_eq!(jetons_ok(".5"), vec![Jeton::Nombre(0.5)]);
    }

    #[test]
    fn espaces_ignores() {
        assert_eq!(
            jetons_ok("  1 +  2 "),
            vec![Jeton::Nombre(1.0), Jeton::Plus, Jeton::Nombre(2.0)]
        );
    }

    #[test]
    fn pi_sous_toutes_ses_formes() {
        assert_eq!(jetons_ok("pi"), vec![Jeton::Pi]);
        assert_eq!(jetons_ok("PI"), vec![Jeton::Pi]);
        assert_eq!(jetons_ok("π"), vec![Jeton::Pi]);
    }

    #[test]
    fn operateurs_et_parentheses() {
        assert_eq!(
            jetons_ok("(1+2)*3/4-5^6"),
            vec![
                Jeton::ParG,
                Jeton::Nombre(1.0),
                Jeton::Plus,
                Jeton::Nombre(2.0),
                Jeton::ParD,
                Jeton::Etoile,
                Jeton::Nombre(3.0),
                Jeton::Barre,
                Jeton::Nombre(4.0),
                Jeton::Moins,
                Jeton::Nombre(5.0),
                Jeton::Accent,
                Jeton::Nombre(6.0),
            ]
        );
    }

    #[test]
    fn caractere_hors_liste_blanche() {
        assert_eq!(tokenize("2+a"), Err(ErreurCalc::CaractereInvalide('a')));
        assert_eq!(tokenize("1%2"), Err(ErreurCalc::CaractereInvalide('%')));
        assert_eq!(tokenize("sin(1)"), Err(ErreurCalc::CaractereInvalide('s')));
    }

    #[test]
    fn point_seul_rejete() {
        assert_eq!(tokenize("."), Err(ErreurCalc::ExpressionInvalide));
        assert_eq!(tokenize("1+."), Err(ErreurCalc::ExpressionInvalide));
    }

    #[test]
    fn double_point_decoupe_en_deux_nombres() {
        // "1.2.3" -> Nombre(1.2) puis Nombre(0.3) : c'est le parseur qui
        // rejettera les valeurs adjacentes.
        assert_eq!(
            jetons_ok("1.2.3"),
            vec![Jeton::Nombre(1.2), Jeton::Nombre(0.3)]
        );
    }
}
