// src/noyau/options.rs

use super::erreur::ErreurNoyau;

/// Marqueur de variable par défaut : `$x$`.
pub const MARQUEUR_DEFAUT: char = '$';

/// Caractères réservés par la grammaire (interdits comme marqueur).
const RESERVES: &str = "+-*/%^().";

/// Options de lecture d’une expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    marqueur_variable: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marqueur_variable: MARQUEUR_DEFAUT,
        }
    }
}

impl Options {
    /// Change le marqueur (ex: `'` comme dans `sin('x')`).
    /// Seule une ponctuation ASCII hors grammaire est acceptée (pas de lettre,
    /// chiffre, espace, opérateur, point ni parenthèse).
    pub fn with_marqueur(mut self, marqueur: char) -> Result<Self, ErreurNoyau> {
        if !marqueur.is_ascii_punctuation() || RESERVES.contains(marqueur) {
            return Err(ErreurNoyau::InvalidMarker(marqueur));
        }
        self.marqueur_variable = marqueur;
        Ok(self)
    }

    pub fn marqueur(&self) -> char {
        self.marqueur_variable
    }
}
