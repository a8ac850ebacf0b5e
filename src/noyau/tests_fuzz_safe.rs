//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’automate avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés APRÈS CHAQUE touche

use std::time::{Duration, Instant};

use super::automate::{Phase, MARQUEUR_ERREUR};
use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::jetons::Operateur;
use super::{EtatCalc, Touche};

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

fn gen_touche(rng: &mut Rng) -> Touche {
    // pondération : beaucoup de chiffres, des opérateurs, peu de "=" et de "C"
    match rng.pick(40) {
        0..=19 => Touche::Chiffre(rng.pick(10) as u8),
        20..=22 => Touche::Point,
        23..=25 => Touche::Operateur(Operateur::Plus),
        26..=29 => Touche::Operateur(Operateur::Moins),
        30..=32 => Touche::Operateur(Operateur::Fois),
        33..=35 => Touche::Operateur(Operateur::Div),
        36..=38 => Touche::Egal,
        _ => Touche::Effacer,
    }
}

fn gen_sequence(rng: &mut Rng, max_len: u32) -> Vec<Touche> {
    let n = 1 + rng.pick(max_len);
    (0..n).map(|_| gen_touche(rng)).collect()
}

/* ------------------------ Invariants ------------------------ */

fn rejoue(touches: &[Touche]) -> EtatCalc {
    touches
        .iter()
        .fold(EtatCalc::default(), |e, t| e.appliquer(*t))
}

fn est_op(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn check_invariants(etat: &EtatCalc, seq: &[Touche]) {
    let expr = etat.expression.to_string();
    let ctx = || format!("seq={seq:?} expr={expr:?} affichage={:?}", etat.affichage);

    assert!(!etat.affichage.is_empty(), "affichage vide: {}", ctx());

    // vient_d_evaluer => résultat ou marqueur d’erreur
    if etat.vient_d_evaluer {
        if etat.affichage == MARQUEUR_ERREUR {
            assert!(expr.is_empty(), "erreur mais expression non vide: {}", ctx());
        } else {
            assert_eq!(expr, etat.affichage, "{}", ctx());
            assert!(etat.affichage.parse::<f64>().is_ok(), "{}", ctx());
        }
    }

    // nombre en cours : l’écran montre le nombre, sans le '-' unaire
    if etat.phase() == Phase::NombreEnCours {
        let ouvert = etat.expression.nombre_ouvert().unwrap_or_default();
        let sans_signe = ouvert.strip_prefix('-').unwrap_or(ouvert);
        assert_eq!(etat.affichage, sans_signe, "{}", ctx());
    }

    // pas de début par + * /
    if let Some(c) = expr.chars().next() {
        assert!(!matches!(c, '+' | '*' | '/'), "opérateur en tête: {}", ctx());
    }

    // deux opérateurs côte à côte : seulement "x-" (négatif en attente), jamais trois
    let cs: Vec<char> = expr.chars().collect();
    for w in cs.windows(2) {
        if est_op(w[0]) && est_op(w[1]) {
            assert_eq!(w[1], '-', "opérateurs consécutifs: {}", ctx());
        }
    }
    for w in cs.windows(3) {
        assert!(
            !(est_op(w[0]) && est_op(w[1]) && est_op(w[2])),
            "trois opérateurs: {}",
            ctx()
        );
    }

    // au plus un '.' par nombre
    for nombre in expr.split(est_op) {
        assert!(
            nombre.matches('.').count() <= 1,
            "deux points dans {nombre:?}: {}",
            ctx()
        );
    }

    // toujours un préfixe évaluable : seule la division peut échouer
    let base = etat.expression.sans_operateurs_finaux();
    if !base.est_vide() {
        match eval_expression(&base.to_string()) {
            Ok(_) | Err(ErreurEval::NonFini) => {}
            Err(e) => panic!("échec structurel {e}: {}", ctx()),
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_apres_chaque_touche() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC41C_2024);

    for _ in 0..2_000 {
        budget(start, max);

        let seq = gen_sequence(&mut rng, 40);
        let mut etat = EtatCalc::default();
        for (i, t) in seq.iter().enumerate() {
            etat = etat.appliquer(*t);
            check_invariants(&etat, &seq[..=i]);
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(7);

    for _ in 0..500 {
        budget(start, max);

        let seq = gen_sequence(&mut rng, 30);
        let a = rejoue(&seq);
        let b = rejoue(&seq);
        assert_eq!(a, b, "seq={seq:?}");
    }
}

#[test]
fn fuzz_repliement_operateurs() {
    // "a op1 op2 b =" == "a op2 b =" quand op2 n’est pas un '-' unaire
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(42);

    let ops = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Div,
    ];

    for _ in 0..500 {
        budget(start, max);

        let a = 1 + rng.pick(9) as u8;
        let b = 1 + rng.pick(9) as u8;
        let op1 = ops[rng.pick(4) as usize];
        let op2 = ops[1 + rng.pick(3) as usize];
        let op2 = if op2 == Operateur::Moins {
            Operateur::Plus
        } else {
            op2
        };

        let long = rejoue(&[
            Touche::Chiffre(a),
            Touche::Operateur(op1),
            Touche::Operateur(op2),
            Touche::Chiffre(b),
            Touche::Egal,
        ]);
        let court = rejoue(&[
            Touche::Chiffre(a),
            Touche::Operateur(op2),
            Touche::Chiffre(b),
            Touche::Egal,
        ]);
        assert_eq!(long.affichage, court.affichage, "{a} {op1} {op2} {b}");
    }
}
