//! Calculatrice RPN : expressions réelles infixes, lues une fois, évaluées N fois.
//!
//! ```
//! use calculatrice_rpn::Expression;
//!
//! let mut e = Expression::parse("sin(rad($x$))").unwrap();
//! e.bind("x", 90.0).unwrap();
//! assert!((e.evaluate().unwrap() - 1.0).abs() < 1e-9);
//! ```

pub mod noyau;

pub use noyau::{eval_expression, ErreurNoyau, Expression, Options, Var};
