//! Tests fuzz safe : robustesse + déterminisme de l’éditeur.
//!
//! But : marteler `edit` avec des suites de touches aléatoires sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de saisie bornée
//! - budget temps global
//! - invariants : C vide tout, BS pèle jusqu’à vide, '=' raté idempotent,
//!   parenthèses jamais plus fermées qu’ouvertes

use std::time::{Duration, Instant};

use super::eval::evaluer;
use super::{edit, Fonction, Op, Tok, Touche};

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
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

/// Touche d’édition (ni C, ni =) : chiffres surreprésentés pour avoir des nombres.
fn gen_touche_saisie(rng: &mut Rng) -> Touche {
    match rng.pick(10) {
        0..=3 => Touche::Chiffre(rng.pick(10) as u8),
        4 => Touche::Point,
        5 | 6 => Touche::Op(Op::TOUS[rng.pick(5) as usize]),
        7 => Touche::Fonction(Fonction::TOUTES[rng.pick(9) as usize]),
        8 => Touche::LPar,
        _ => Touche::RPar,
    }
}

/// Toutes les touches, y compris BS, 1/x et = (mais pas C).
fn gen_touche(rng: &mut Rng) -> Touche {
    match rng.pick(14) {
        0 => Touche::Retour,
        1 => Touche::Egal,
        2 => Touche::Inverse,
        _ => gen_touche_saisie(rng),
    }
}

fn gen_saisie(rng: &mut Rng, n: usize) -> Vec<Tok> {
    (0..n).fold(Vec::new(), |acc, _| edit(&acc, gen_touche_saisie(rng)))
}

/* ------------------------ Invariants ------------------------ */

fn check_parentheses(t: &[Tok]) {
    let ouvertes = t.iter().filter(|x| matches!(x, Tok::LPar)).count();
    let fermees = t.iter().filter(|x| matches!(x, Tok::RPar)).count();
    assert!(ouvertes >= fermees, "trop de ')' : {t:?}");
}

/// Nombre de BS attendus : un par caractère d’un nombre, un par autre jeton.
fn nb_retours_attendus(t: &[Tok]) -> usize {
    t.iter()
        .map(|x| match x {
            Tok::Num(s) => s.chars().count(),
            _ => 1,
        })
        .sum()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_clear_vide_toujours() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for i in 0..200 {
        budget(t0, max);
        let t = gen_saisie(&mut rng, i % 25);
        assert!(edit(&t, Touche::Effacer).is_empty());
    }
}

#[test]
fn fuzz_safe_retour_pele_jusqu_a_vide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let n = 1 + rng.pick(20) as usize;
        let mut t = gen_saisie(&mut rng, n);
        let attendu = nb_retours_attendus(&t);

        let mut pas = 0usize;
        while !t.is_empty() {
            t = edit(&t, Touche::Retour);
            pas += 1;
            assert!(pas <= attendu, "BS ne converge pas");
        }
        assert_eq!(pas, attendu);
    }
}

#[test]
fn fuzz_safe_egal_rate_idempotent() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let n = 1 + rng.pick(15) as usize;
        let t = gen_saisie(&mut rng, n);
        let apres = edit(&t, Touche::Egal);

        match evaluer(&t) {
            Ok(r) => {
                assert_eq!(apres, r);
                // un nombre, ou rien quand il n’y avait que des parenthèses
                assert!(apres.len() <= 1, "résultat multiple : {apres:?}");
                assert!(apres.iter().all(Tok::est_num), "résultat non numérique : {apres:?}");
                vus_ok += 1;
            }
            Err(_) => {
                assert_eq!(apres, t, "'=' raté doit rendre la saisie intacte");
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 5, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 5, "trop peu d’échecs: {vus_err}");
}

#[test]
fn fuzz_safe_determinisme_et_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes touches => mêmes saisies
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    let mut ta: Vec<Tok> = Vec::new();
    let mut tb: Vec<Tok> = Vec::new();

    for i in 0..2000 {
        budget(t0, max);

        // C de temps en temps pour garder des saisies courtes
        let (ka, kb) = if i % 40 == 39 {
            (Touche::Effacer, Touche::Effacer)
        } else {
            (gen_touche(&mut a), gen_touche(&mut b))
        };

        ta = edit(&ta, ka);
        tb = edit(&tb, kb);

        assert_eq!(ta, tb);
        check_parentheses(&ta);
    }
}
