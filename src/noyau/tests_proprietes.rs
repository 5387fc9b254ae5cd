//! Tests propriétés : robustesse + conformité à une évaluation de référence.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - campagne 1 : expressions bien formées, comparées à une référence
//!   calculée sur le même arbre (mêmes contrôles, même arrondi)
//! - campagne 2 : soupe de caractères de la liste blanche, invariant :
//!   jamais de panique, toujours Ok fini ou ErreurCalc

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::{arrondi_8, evaluer};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé : {:?}", max);
    }
}

/* ------------------------ Référence sur arbre ------------------------ */

// Arbre minimal : feuille (nombre ou pi) ou noeud binaire.
// Le rendu est TOUJOURS parenthésé : la précédence ne joue pas, seule la
// sémantique des opérations est comparée.
enum Arbre {
    Nombre(f64),
    Pi,
    Bin(char, Box<Arbre>, Box<Arbre>),
}

impl Arbre {
    fn rendre(&self) -> String {
        match self {
            Arbre::Nombre(v) => format!("{v}"),
            Arbre::Pi => "pi".to_string(),
            Arbre::Bin(op, a, b) => format!("({}{}{})", a.rendre(), op, b.rendre()),
        }
    }

    /// Même sémantique que le pipeline : contrôle au vol de chaque opération,
    /// gauche avant droite (l'ordre des erreurs en dépend).
    fn valeur(&self) -> Result<f64, ErreurCalc> {
        match self {
            Arbre::Nombre(v) => Ok(*v),
            Arbre::Pi => Ok(std::f64::consts::PI),
            Arbre::Bin(op, a, b) => {
                let a = a.valeur()?;
                let b = b.valeur()?;
                let v = match op {
                    '+' => a + b,
                    '-' => a - b,
                    '*' => a * b,
                    '/' => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    '^' => {
                        let v = a.powf(b);
                        if !v.is_finite() {
                            return Err(ErreurCalc::PuissanceInvalide);
                        }
                        v
                    }
                    _ => unreachable!(),
                };
                if !v.is_finite() {
                    return Err(ErreurCalc::ResultatInvalide);
                }
                Ok(v)
            }
        }
    }

    fn nb_accents(&self) -> usize {
        match self {
            Arbre::Nombre(_) | Arbre::Pi => 0,
            Arbre::Bin(op, a, b) => {
                usize::from(*op == '^') + a.nb_accents() + b.nb_accents()
            }
        }
    }
}

fn gen_feuille(rng: &mut Rng) -> Arbre {
    match rng.pick(12) {
        0 => Arbre::Pi,
        1 => Arbre::Nombre(0.5),
        2 => Arbre::Nombre(2.5),
        3 => Arbre::Nombre(0.1),
        n => Arbre::Nombre(f64::from(n - 4)), // 0..=7
    }
}

fn gen_arbre(rng: &mut Rng, profondeur: u32) -> Arbre {
    if profondeur == 0 || rng.pick(4) == 0 {
        return gen_feuille(rng);
    }
    let op = match rng.pick(5) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        _ => '^',
    };
    let a = gen_arbre(rng, profondeur - 1);
    let b = gen_arbre(rng, profondeur - 1);
    Arbre::Bin(op, Box::new(a), Box::new(b))
}

/* ------------------------ Campagne 1 : conformité ------------------------ */

#[test]
fn conformite_a_la_reference() {
    let start = Instant::now();
    let mut rng = Rng::new(0xCA1C_0001);

    let mut compares = 0usize;

    for _ in 0..600 {
        budget(start, Duration::from_secs(10));

        let arbre = gen_arbre(&mut rng, 4);
        if arbre.nb_accents() > 10 {
            // hors contrat : la borne d'entrée refuserait l'expression
            continue;
        }
        let texte = arbre.rendre();

        match (arbre.valeur(), evaluer(&texte)) {
            (Ok(reference), Ok(obtenu)) => {
                assert_eq!(
                    obtenu,
                    arrondi_8(reference),
                    "divergence pour {texte:?}"
                );
                compares += 1;
            }
            (Ok(reference), Err(e)) => {
                panic!("evaluer({texte:?}) = {e} mais référence = {reference}")
            }
            (Err(attendue), Err(obtenue)) => {
                assert_eq!(obtenue, attendue, "erreur divergente pour {texte:?}");
            }
            (Err(attendue), Ok(v)) => {
                panic!("evaluer({texte:?}) = {v} mais erreur attendue : {attendue}")
            }
        }
    }

    // le générateur doit produire une vraie campagne, pas trois cas
    assert!(compares > 100, "trop peu de cas comparés : {compares}");
}

/* ------------------------ Campagne 2 : soupe de caractères ------------------------ */

#[test]
fn soupe_ne_panique_jamais() {
    let start = Instant::now();
    let mut rng = Rng::new(0xCA1C_0002);

    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '^', '(', ')', '.',
        'p', 'i', 'π', ' ',
    ];

    for _ in 0..3000 {
        budget(start, Duration::from_secs(10));

        let longueur = rng.pick(24) as usize;
        let texte: String = (0..longueur)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // invariant : Ok fini (et déjà arrondi) ou erreur typée, jamais de panique
        match evaluer(&texte) {
            Ok(v) => {
                assert!(v.is_finite(), "valeur non finie pour {texte:?}");
                assert_eq!(v, arrondi_8(v), "valeur non arrondie pour {texte:?}");
            }
            Err(_) => {}
        }
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn evaluation_deterministe() {
    // deux passes sur les mêmes textes : résultats identiques bit à bit
    let mut rng = Rng::new(0xCA1C_0003);
    let textes: Vec<String> = (0..50)
        .map(|_| gen_arbre(&mut rng, 3).rendre())
        .collect();

    for texte in &textes {
        assert_eq!(evaluer(texte), evaluer(texte), "non déterministe : {texte:?}");
    }
}
