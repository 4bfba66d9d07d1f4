//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la session sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, débordement)
//! - invariant clé : échec => "Error", historique et Ans inchangés

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::erreur::ErreurCalc;
use super::session::{SessionCalc, MARQUEUR_ERREUR};
use super::{eval_expression, Valeur};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurCalc) -> bool {
    // Liste blanche : erreurs *normales* sur des expressions bien formées.
    matches!(e, ErreurCalc::DivisionParZero | ErreurCalc::Debordement)
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(1000)),
        3 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        4 => format!(".{}", rng.pick(10)),
        _ => format!("{}e-{}", 1 + rng.pick(9), rng.pick(8)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(7) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("{a}*{}", gen_expr(rng, depth - 1)),
        4 => format!("({a})/({})", gen_expr(rng, depth - 1)),
        5 => format!("-{a}"),
        _ => format!(" {a} "),
    }
}

/// Sous-ensemble entier (+ - * seulement) avec valeur de référence.
fn gen_entier(rng: &mut Rng, depth: usize) -> (String, i128) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(50) as i128;
        return (n.to_string(), n);
    }

    let (sa, va) = gen_entier(rng, depth - 1);
    let (sb, vb) = gen_entier(rng, depth - 1);
    match rng.pick(4) {
        0 => (format!("({sa}+{sb})"), va + vb),
        1 => (format!("({sa}-{sb})"), va - vb),
        2 => (format!("({sa})*({sb})"), va * vb),
        _ => (format!("-({sa})"), -va),
    }
}

fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', 'e', 'E', '+', '-', '*', '/', '(', ')', ' ', 'x', '^', 'π', '²', '_',
    ];
    let n = rng.pick(16) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_session() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut s = SessionCalc::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let hist_avant = s.historique().len();
        let ans_avant = s.dernier_resultat().cloned();

        s.effacer();
        s.inserer(&expr);

        match s.evaluer_detail() {
            Ok(v) => {
                let texte = v.to_string();
                assert_eq!(s.entree(), texte);
                assert_eq!(s.historique().len(), hist_avant + 1);
                assert_eq!(s.historique().last(), Some(&format!("{expr} = {texte}")));
                assert_eq!(s.dernier_resultat(), Some(&v));

                // relecture : le texte affiché redonne la même valeur (hors inf/nan)
                if let Valeur::Flottant(x) = v {
                    if x.is_finite() {
                        assert_eq!(eval_expression(&texte), Ok(v.clone()), "expr={expr:?}");
                    }
                } else {
                    assert_eq!(eval_expression(&texte), Ok(v.clone()), "expr={expr:?}");
                }
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                assert_eq!(s.entree(), MARQUEUR_ERREUR);
                assert_eq!(s.historique().len(), hist_avant);
                assert_eq!(s.dernier_resultat().cloned(), ans_avant);
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let sorties = |seed: u64| {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let e = gen_expr(&mut rng, 3);
                eval_expression(&e).map(|v| v.to_string())
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(sorties(0xBADC0DE_u64), sorties(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_entiers_exacts() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let (expr, attendu) = gen_entier(&mut rng, 4);
        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(v, Valeur::Entier(BigInt::from(attendu)), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..400 {
        budget(t0, max);

        let soupe = gen_soupe(&mut rng);
        let mut s = SessionCalc::new();
        s.inserer(&soupe);
        if s.evaluer() {
            assert_eq!(s.historique().len(), 1);
            assert!(s.dernier_resultat().is_some());
        } else {
            assert_eq!(s.entree(), MARQUEUR_ERREUR, "soupe={soupe:?}");
            assert!(s.historique().is_empty());
            assert!(s.dernier_resultat().is_none());
        }
        // jamais de panique, y compris si on enchaîne sur une fonction
        if rng.coin() {
            s.appliquer_fonction_nommee("sqrt");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 500);
    budget(t0, max);

    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 500*(1/2) = 250
    assert_eq!(v.to_string(), "250.0");
}
