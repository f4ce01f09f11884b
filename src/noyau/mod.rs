//! Noyau réel (f64) : expressions infixes à variables, lues une fois, évaluées N fois.
//!
//! Organisation interne :
//! - erreur.rs    : ErreurNoyau (+ Display)
//! - options.rs   : marqueur de variable
//! - tables.rs    : opérateurs, fonctions, précédences (tables fixes)
//! - jetons.rs    : tokenisation (moins unaire par règle arrière)
//! - rpn.rs       : shunting-yard + table des variables + validation
//! - variables.rs : table (nom, valeur) à slots fixes
//! - plan.rs      : précalcul RPN -> plan typé
//! - machine.rs   : évaluation du plan (pile de f64)
//! - format.rs    : affichage d’un résultat
//! - eval.rs      : pipeline complet (Expression)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod machine;
pub mod options;
pub mod plan;
pub mod rpn;
pub mod tables;
pub mod variables;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use erreur::ErreurNoyau;
pub use eval::{eval_expression, Expression};
pub use options::Options;
pub use variables::Var;
