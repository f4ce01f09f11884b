//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées AVEC leur valeur attendue (calcul direct en f64)
//! - texte aléatoire : jamais de panique, seulement des erreurs attendues

use std::time::{Duration, Instant};

use super::erreur::ErreurNoyau;
use super::{eval_expression, Expression};

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

/* ------------------------ Comparaison tolérante (NaN == NaN) ------------------------ */

fn meme_valeur(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let entier = rng.pick(100) as f64;
    let v = if rng.coin() {
        entier
    } else {
        entier + rng.pick(100) as f64 / 100.0
    };
    // texte exact de v (2 décimales max)
    let txt = format!("{v}");
    let v: f64 = txt.parse().unwrap_or(0.0);
    if rng.pick(4) == 0 {
        // moins unaire : seulement entre parenthèses, pour rester en position de signe
        (format!("(-{txt})"), -v)
    } else {
        (txt, v)
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(10) {
        0 | 1 => gen_nombre(rng),
        2..=6 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            let (op, v) = match rng.pick(6) {
                0 => ('+', va + vb),
                1 => ('-', va - vb),
                2 => ('*', va * vb),
                3 => ('/', va / vb),
                4 => ('%', va % vb),
                _ => ('^', va.powf(vb)),
            };
            (format!("({a}{op}{b})"), v)
        }
        _ => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (nom, v) = match rng.pick(8) {
                0 => ("sin", va.sin()),
                1 => ("cos", va.cos()),
                2 => ("atan", va.atan()),
                3 => ("abs", va.abs()),
                4 => ("sqrt", va.sqrt()),
                5 => ("exp", va.exp()),
                6 => ("log", va.ln()),
                _ => ("rad", va / 360.0 * (2.0 * std::f64::consts::PI)),
            };
            let nom = if rng.coin() {
                nom.to_string()
            } else {
                nom.to_ascii_uppercase()
            };
            (format!("{nom}({a})"), v)
        }
    }
}

fn is_erreur_attendue(e: &ErreurNoyau) -> bool {
    matches!(
        e,
        ErreurNoyau::BadInput
            | ErreurNoyau::SyntaxError(_)
            | ErreurNoyau::UnknownExpression(_)
            | ErreurNoyau::UnsupportedFunction(_)
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            meme_valeur(v, attendu),
            "expr={expr:?} v={v} attendu={attendu}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let (e1, _) = gen_expr(&mut r1, 4);
        let (e2, _) = gen_expr(&mut r2, 4);
        assert_eq!(e1, e2);

        let a = Expression::parse(&e1).unwrap();
        let b = Expression::parse(&e2).unwrap();
        assert_eq!(a.rpn(), b.rpn());
        assert_eq!(a.plan(), b.plan());

        let va = a.evaluate().unwrap();
        let vb = b.evaluate().unwrap();
        assert!(meme_valeur(va, vb), "expr={e1:?}");
    }
}

#[test]
fn fuzz_safe_texte_aleatoire_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    const ALPHABET: &[char] = &[
        '0', '1', '2', '.', '+', '-', '*', '/', '%', '^', '(', ')', '$', 'x', 's', 'i', 'n', ' ',
    ];

    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        match Expression::parse(&s) {
            Ok(e) => {
                // tout ce qui est lu doit s’évaluer (structure validée à la lecture)
                let r = e.evaluate();
                assert!(r.is_ok(), "expr={s:?} lue mais non évaluable: {r:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(is_erreur_attendue(&e), "erreur non attendue: expr={s:?} err={e}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}
