// src/noyau/tables.rs
//
// Tables fixes (lecture seule) : opérateurs, fonctions, précédences.
//
// Précédences :
//   ( et opérandes : 1   (sentinelle)
//   + -            : 2
//   * / %          : 3
//   ^              : 4
//   fonctions      : 5

use num_traits::{Float, FloatConst};

/// Précédence sentinelle : parenthèse gauche, opérandes.
pub const PRECEDENCE_SENTINELLE: u8 = 1;

/// Précédence des fonctions (lient plus fort que tout opérateur).
pub const PRECEDENCE_FONCTION: u8 = 5;

/// Texte de π injecté à la lecture à la place de `$pi$`.
pub const PI_TEXTE: &str = "3.14159265358979323846";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Reste,
    Puissance,
}

const OPERATEURS: [(char, Operateur); 6] = [
    ('+', Operateur::Plus),
    ('-', Operateur::Moins),
    ('*', Operateur::Fois),
    ('/', Operateur::Divise),
    ('%', Operateur::Reste),
    ('^', Operateur::Puissance),
];

impl Operateur {
    pub fn from_char(c: char) -> Option<Self> {
        OPERATEURS
            .iter()
            .find(|(symbole, _)| *symbole == c)
            .map(|(_, op)| *op)
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Reste => '%',
            Operateur::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 2,
            Operateur::Fois | Operateur::Divise | Operateur::Reste => 3,
            Operateur::Puissance => 4,
        }
    }

    /// `l op r`. `%` : reste flottant (signe du dividende). `^` : powf sans cas particulier.
    pub fn appliquer<T: Float>(self, l: T, r: T) -> T {
        match self {
            Operateur::Plus => l + r,
            Operateur::Moins => l - r,
            Operateur::Fois => l * r,
            Operateur::Divise => l / r,
            Operateur::Reste => l % r,
            Operateur::Puissance => l.powf(r),
        }
    }
}

/// Ensemble fermé des fonctions. Les discriminants sont les ordinaux du plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Fonction {
    Log = 1,
    Log10,
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Atan2, // réservée
    Acot,
    Deg,
    Rad,
    Sqrt,
    Exp,
    Abs,
}

const FONCTIONS: [(&str, Fonction); 16] = [
    ("log", Fonction::Log),
    ("log10", Fonction::Log10),
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("cot", Fonction::Cot),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("atan2", Fonction::Atan2),
    ("acot", Fonction::Acot),
    ("deg", Fonction::Deg),
    ("rad", Fonction::Rad),
    ("sqrt", Fonction::Sqrt),
    ("exp", Fonction::Exp),
    ("abs", Fonction::Abs),
];

impl Fonction {
    /// Reconnaît un nom tout en minuscules OU tout en majuscules.
    /// La casse mixte ("Sin", "Log10") n’est pas une fonction.
    pub fn from_name(nom: &str) -> Option<Self> {
        FONCTIONS
            .iter()
            .find(|(minuscule, _)| nom == *minuscule || nom == minuscule.to_ascii_uppercase())
            .map(|(_, f)| *f)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn nom(self) -> &'static str {
        FONCTIONS
            .iter()
            .find(|(_, f)| *f == self)
            .map_or("?", |(nom, _)| nom)
    }

    /// Applique la fonction. `None` pour atan2 (réservée, pas d’implémentation).
    ///
    /// Aucun contrôle de domaine : log(-1) = NaN, asin(2) = NaN, cot(0) = inf.
    pub fn appliquer<T: Float + FloatConst>(self, x: T) -> Option<T> {
        let deux_pi = T::PI() + T::PI();
        let trois_cent_soixante = T::from(360.0)?;

        let v = match self {
            Fonction::Log => x.ln(),
            Fonction::Log10 => x.log10(),
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Cot => T::one() / x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),
            Fonction::Atan2 => return None,
            Fonction::Acot => (T::one() / x).atan(),
            Fonction::Deg => x / deux_pi * trois_cent_soixante,
            Fonction::Rad => x / trois_cent_soixante * deux_pi,
            Fonction::Sqrt => x.sqrt(),
            Fonction::Exp => x.exp(),
            Fonction::Abs => x.abs(),
        };
        Some(v)
    }
}
