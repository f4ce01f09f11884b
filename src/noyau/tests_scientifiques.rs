//! Tests scientifiques (campagne) : scénarios littéraux + invariants + stress borné.
//!
//! Notes :
//! - `^` est associatif à gauche (compatibilité) : 2^3^2 = 64.
//! - Les erreurs de domaine ne sont pas des erreurs : NaN / ±inf en sortie.
//! - Stress : plan linéaire (pas d’AST récursif), donc pas de risque de pile ;
//!   on garde quand même un budget temps.

use std::time::{Duration, Instant};

use super::erreur::ErreurNoyau;
use super::options::Options;
use super::variables::Var;
use super::{eval_expression, Expression};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64, tol: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= tol,
        "expr={expr:?} v={v} attendu={attendu} tol={tol}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios littéraux ------------------------ */

#[test]
fn sci_exp_sin_rad_log10() {
    let attendu =
        -12.4 + (68.0_f64 * std::f64::consts::PI / 180.0).sin().exp() * 96.0_f64.log10();
    let v = eval_ok("-12.4 + exp(sin(rad(68))) * log10(96)");
    assert!(v.is_finite());
    assert!((v - attendu).abs() < 1e-12, "v={v} attendu={attendu}");
    assert!((v - -7.390044).abs() < 1e-6);
}

#[test]
fn sci_sin_rad_log_sqrt() {
    assert_proche("1.56 + sin(rad(37.81)) * log(sqrt(75))", 2.88341, 1e-4);
}

#[test]
fn sci_variable_dollar() {
    let mut e = Expression::parse("sin(rad($x$))").unwrap();
    e.bind("x", 90.0).unwrap();
    let v = e.evaluate().unwrap();
    assert!((v - 1.0).abs() < 1e-9, "v={v}");
}

#[test]
fn sci_puissance_gauche() {
    assert_eq!(eval_ok("2^3^2"), 64.0);
    // parenthèses explicites pour la lecture “mathématique”
    assert_eq!(eval_ok("2^(3^2)"), 512.0);
}

#[test]
fn sci_pi_toutes_casses() {
    for s in ["sin(2*$pi$*5)", "sin(2*$PI$*5)"] {
        let e = Expression::parse(s).unwrap();
        assert!(e.variable_names().is_empty(), "pi enregistré comme variable: {s}");
        let v = e.evaluate().unwrap();
        assert!(v.abs() < 1e-12, "expr={s:?} v={v}");
    }
}

#[test]
fn sci_pi_non_affectable() {
    let mut e = Expression::parse("$pi$ * $r$ ^ 2").unwrap();
    assert_eq!(e.variable_names(), ["r"]);
    assert_eq!(e.bind("pi", 3.0), Err(ErreurNoyau::UnknownVariable("pi".into())));
    e.bind("r", 2.0).unwrap();
    assert!((e.evaluate().unwrap() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
}

/* ------------------------ Erreurs structurelles ------------------------ */

#[test]
fn sci_entree_vide() {
    assert_eq!(Expression::parse("").unwrap_err(), ErreurNoyau::BadInput);
    assert_eq!(Expression::parse("   ").unwrap_err(), ErreurNoyau::BadInput);
}

#[test]
fn sci_parentheses() {
    assert!(matches!(
        Expression::parse("(1+2").unwrap_err(),
        ErreurNoyau::SyntaxError(_)
    ));
    assert!(matches!(
        Expression::parse("1+2)").unwrap_err(),
        ErreurNoyau::SyntaxError(_)
    ));
}

#[test]
fn sci_fonction_inconnue() {
    assert_eq!(
        Expression::parse("FOO(1)").unwrap_err(),
        ErreurNoyau::UnknownExpression("FOO".into())
    );
    // casse mixte refusée
    assert_eq!(
        Expression::parse("Log10(10)").unwrap_err(),
        ErreurNoyau::UnknownExpression("Log10".into())
    );
}

#[test]
fn sci_plus_unaire_suit_la_regle_des_noms() {
    assert_eq!(
        Expression::parse("+5").unwrap_err(),
        ErreurNoyau::UnknownExpression("+5".into())
    );
}

#[test]
fn sci_atan2_lu_mais_refuse_a_l_evaluation() {
    let e = Expression::parse("atan2(1)").unwrap();
    assert_eq!(
        e.evaluate(),
        Err(ErreurNoyau::UnsupportedFunction("atan2".into()))
    );
}

/* ------------------------ Fonctions (ensemble fermé) ------------------------ */

#[test]
fn sci_fonctions_une_par_une() {
    use std::f64::consts::PI;
    let cas: [(&str, f64); 15] = [
        ("log(2)", 2.0_f64.ln()),
        ("log10(1000)", 3.0),
        ("sin(1)", 1.0_f64.sin()),
        ("cos(1)", 1.0_f64.cos()),
        ("tan(1)", 1.0_f64.tan()),
        ("cot(1)", 1.0 / 1.0_f64.tan()),
        ("asin(0.5)", 0.5_f64.asin()),
        ("acos(0.5)", 0.5_f64.acos()),
        ("atan(2)", 2.0_f64.atan()),
        ("acot(2)", 0.5_f64.atan()),
        ("deg(3.14159265358979323846)", 180.0),
        ("rad(180)", PI),
        ("sqrt(2)", 2.0_f64.sqrt()),
        ("exp(1)", 1.0_f64.exp()),
        ("abs(-3.5)", 3.5),
    ];
    for (expr, attendu) in cas {
        assert_proche(expr, attendu, 1e-12);
    }
}

#[test]
fn sci_majuscules() {
    assert_proche("SIN(RAD(30)) + ABS(-1)", 1.5, 1e-12);
}

#[test]
fn sci_domaine_sans_erreur() {
    assert!(eval_ok("log(-1)").is_nan());
    assert!(eval_ok("asin(2)").is_nan());
    assert!(eval_ok("sqrt(-4)").is_nan());
    assert!(eval_ok("1/0").is_infinite());
    assert!(eval_ok("(-8)^(1/3)").is_nan());
    assert_eq!(eval_ok("(-2)^3"), -8.0);
}

#[test]
fn sci_reste_flottant() {
    assert_eq!(eval_ok("7.5%2"), 1.5);
    assert_eq!(eval_ok("-7.5%2"), -1.5);
    assert_eq!(eval_ok("7%-3"), 1.0);
}

#[test]
fn sci_moins_double() {
    assert_eq!(eval_ok("3--5"), 8.0);
    assert_eq!(eval_ok("2*-3"), -6.0);
    assert_eq!(eval_ok("(-2)*(-3)"), 6.0);
    assert_eq!(eval_ok("2 - 3"), -1.0);
}

/* ------------------------ Exemples du programme de démonstration ------------------------ */

#[test]
fn sci_exemple_sans_variables() {
    assert_proche(
        "sin(rad(12.67)*exp(1.13)) + TAN(COS(RAD(32.1)))*LOG(12)",
        3.44461,
        1e-5,
    );
}

#[test]
fn sci_exemple_avec_variables_apostrophe() {
    let o = Options::default().with_marqueur('\'').unwrap();
    let mut e = Expression::parse_avec(
        "sin(rad('var2')*exp('var1')) + TAN(COS(RAD('var3')))*LOG('var4')",
        &o,
    )
    .unwrap();
    assert_eq!(e.variable_names(), ["var2", "var1", "var3", "var4"]);

    let v = e
        .evaluate_with(&[
            Var::new("var1", 1.13),
            Var::new("var2", 12.67),
            Var::new("var3", 32.1),
            Var::new("var4", 12.0),
        ])
        .unwrap();
    assert!((v - 3.44461).abs() < 1e-5, "v={v}");
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence() {
    let e = Expression::parse("-12.4 + exp(sin(rad(68))) * log10(96)").unwrap();
    let a = e.evaluate().unwrap();
    for _ in 0..50 {
        assert_eq!(e.evaluate().unwrap().to_bits(), a.to_bits());
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["0.5"; 5000].join(" + ");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 2500.0);
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // abs(abs(...abs(-1)...)) sur 2000 niveaux : plan linéaire, pas de récursion
    let n = 2000;
    let expr = format!("{}-1{}", "abs(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_reevaluations() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut e = Expression::parse("$x$^2 - 2*$x$ + 1").unwrap();
    for k in 0..20_000 {
        let x = k as f64 * 0.001;
        e.bind("x", x).unwrap();
        let v = e.evaluate().unwrap();
        assert!((v - (x - 1.0) * (x - 1.0)).abs() < 1e-9);
    }
    budget(t0, max);
}
