// src/noyau/jetons.rs

use log::debug;

use super::erreur::ErreurNoyau;
use super::options::Options;
use super::tables::PI_TEXTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokKind {
    Nombre,
    Operateur,
    Variable,
    // Tout texte qui précède une '(' sans être autre chose.
    // Le nom est validé plus tard (rpn.rs) pour garder la précédence uniforme.
    Fonction,
    ParG,
    ParD,
}

/// Jeton = (texte, genre).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tok {
    pub texte: String,
    pub genre: TokKind,
}

impl Tok {
    fn new(texte: impl Into<String>, genre: TokKind) -> Self {
        Self {
            texte: texte.into(),
            genre,
        }
    }
}

fn est_binaire_strict(c: char) -> bool {
    matches!(c, '*' | '/' | '^' | '%')
}

fn est_signe(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Le caractère en `i` est-il un opérateur (binaire) ?
///
/// `+`/`-` ne sont PAS des opérateurs :
/// - en tout début d’expression
/// - juste après `(`
/// - juste après un opérateur (y compris un `-` lui-même opérateur)
///
/// La règle est récursive vers l’arrière : on remonte la suite de `+`/`-`
/// consécutifs jusqu’à son premier élément, puis on alterne.
/// Hors de `chars` : `false`.
pub fn est_operateur(chars: &[char], i: usize) -> bool {
    let Some(&c) = chars.get(i) else {
        return false;
    };
    if est_binaire_strict(c) {
        return true;
    }
    if !est_signe(c) {
        return false;
    }

    let mut debut = i;
    while debut > 0 && est_signe(chars[debut - 1]) {
        debut -= 1;
    }

    let mut op = !(debut == 0 || chars[debut - 1] == '(' || est_binaire_strict(chars[debut - 1]));
    for _ in debut..i {
        op = !op;
    }
    op
}

/// Le caractère en `i` commence-t-il (ou continue-t-il) un nombre ?
/// `-` compte comme signe de nombre exactement quand il n’est pas un opérateur.
/// Hors de `chars` : `false`.
pub fn est_nombre(chars: &[char], i: usize) -> bool {
    let Some(&c) = chars.get(i) else {
        return false;
    };
    match c {
        c if c.is_ascii_digit() || c == '.' => true,
        '-' => !est_operateur(chars, i),
        _ => false,
    }
}

/// Découpe une expression infixe en jetons.
///
/// Les espaces sont retirés avant le balayage. Un nombre mal formé
/// (`-` seul, `1.2.3`) est refusé ici plutôt qu’à l’évaluation.
pub fn tokenize(expr: &str, options: &Options) -> Result<Vec<Tok>, ErreurNoyau> {
    let chars: Vec<char> = expr.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(ErreurNoyau::BadInput);
    }

    let marqueur = options.marqueur();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_operateur(&chars, i) {
            out.push(Tok::new(c, TokKind::Operateur));
            i += 1;
            continue;
        }

        if c == '(' {
            out.push(Tok::new("(", TokKind::ParG));
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::new(")", TokKind::ParD));
            i += 1;
            continue;
        }

        if est_nombre(&chars, i) {
            let start = i;
            i += 1; // premier caractère (chiffre, point ou signe)
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            if texte.parse::<f64>().is_err() {
                return Err(ErreurNoyau::syntaxe(format!("nombre invalide '{texte}'")));
            }
            out.push(Tok::new(texte, TokKind::Nombre));
            continue;
        }

        if c == marqueur {
            let debut_nom = i + 1;
            let fin = chars[debut_nom..]
                .iter()
                .position(|&x| x == marqueur)
                .map(|p| debut_nom + p)
                .ok_or_else(|| ErreurNoyau::syntaxe(format!("marqueur de variable '{marqueur}' non fermé")))?;

            let nom: String = chars[debut_nom..fin].iter().collect();
            if nom.is_empty() {
                return Err(ErreurNoyau::syntaxe("nom de variable vide"));
            }

            // π : jamais une variable
            if nom.eq_ignore_ascii_case("pi") {
                out.push(Tok::new(PI_TEXTE, TokKind::Nombre));
            } else {
                out.push(Tok::new(nom, TokKind::Variable));
            }
            i = fin + 1;
            continue;
        }

        // Reste : tout jusqu’à la prochaine '(' (ou la fin) = nom de fonction
        let start = i;
        while i < chars.len() && chars[i] != '(' {
            i += 1;
        }
        let texte: String = chars[start..i].iter().collect();
        out.push(Tok::new(texte, TokKind::Fonction));
    }

    debug!("jetons: {}", format_tokens(&out));
    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.texte.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
