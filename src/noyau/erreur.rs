// src/noyau/erreur.rs

use std::fmt;

/// Erreurs du noyau (lecture, conversion, plan, évaluation).
///
/// Les erreurs de domaine numérique (log négatif, asin hors [-1, 1], division
/// par zéro) ne sont PAS des erreurs : elles sortent en NaN / ±inf.
#[derive(Debug, Clone, PartialEq)]
pub enum ErreurNoyau {
    /// Expression vide (ou seulement des espaces).
    BadInput,
    /// Parenthèses déséquilibrées, nombre mal formé, opérandes manquants.
    SyntaxError(String),
    /// Nom de fonction hors de l’ensemble fermé (texte fautif exact).
    UnknownExpression(String),
    /// Nom jamais marqué comme variable dans l’expression.
    UnknownVariable(String),
    /// Fonction réservée mais non implémentée (atan2).
    UnsupportedFunction(String),
    /// Affectation positionnelle : nombre de valeurs ≠ nombre de variables.
    VariableMismatch { attendu: usize, recu: usize },
    /// Marqueur de variable qui entre en collision avec la grammaire.
    InvalidMarker(char),
    /// Pile d’opérandes ≠ 1 valeur en fin de programme (incohérence interne).
    Incoherence(usize),
}

impl ErreurNoyau {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurNoyau::SyntaxError(msg.into())
    }
}

impl fmt::Display for ErreurNoyau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurNoyau::BadInput => write!(f, "Entrée vide"),
            ErreurNoyau::SyntaxError(msg) => write!(f, "Erreur de syntaxe : {msg}"),
            ErreurNoyau::UnknownExpression(txt) => write!(f, "Expression inconnue : '{txt}'"),
            ErreurNoyau::UnknownVariable(nom) => {
                write!(f, "Variable absente de l’expression : '{nom}'")
            }
            ErreurNoyau::UnsupportedFunction(nom) => {
                write!(f, "Fonction réservée, non prise en charge : '{nom}'")
            }
            ErreurNoyau::VariableMismatch { attendu, recu } => write!(
                f,
                "Nombre de valeurs ({recu}) différent du nombre de variables ({attendu})"
            ),
            ErreurNoyau::InvalidMarker(c) => {
                write!(f, "Marqueur de variable invalide : '{c}'")
            }
            ErreurNoyau::Incoherence(n) => write!(
                f,
                "Programme postfixé incohérent : {n} valeur(s) sur la pile en fin d’évaluation"
            ),
        }
    }
}

impl std::error::Error for ErreurNoyau {}
