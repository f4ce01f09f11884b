// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> programme postfixé (RPN) + table des variables.
//
// Règles:
// - Nombre            : sortie directe
// - Variable          : inscrite dans la table (1re apparition), sortie directe
// - Opérateur         : dépile tant que précédence(sommet) >= précédence(courant)
//                       (donc ^ associatif à GAUCHE : 2^3^2 = (2^3)^2 = 64)
// - Fonction, '('     : empilés tels quels
// - ')'               : dépile jusqu’à '(' ; pile vide => erreur
// - fin               : tout dépiler
//
// Puis validation : une '(' restée dans la sortie => parenthèse non fermée ;
// un nom de fonction hors table => UnknownExpression(nom).

use log::debug;

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, Tok, TokKind};
use super::tables::{Fonction, Operateur, PRECEDENCE_FONCTION, PRECEDENCE_SENTINELLE};
use super::variables::VariableTable;

/// Programme postfixé (noms encore symboliques) + table des variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Postfixe {
    pub jetons: Vec<Tok>,
    pub variables: VariableTable,
}

impl Postfixe {
    /// Texte RPN, jetons séparés par un espace.
    pub fn texte(&self) -> String {
        format_tokens(&self.jetons)
    }
}

fn precedence(t: &Tok) -> u8 {
    match t.genre {
        TokKind::Operateur => t
            .texte
            .chars()
            .next()
            .and_then(Operateur::from_char)
            .map_or(PRECEDENCE_SENTINELLE, Operateur::precedence),
        TokKind::Fonction => PRECEDENCE_FONCTION,
        _ => PRECEDENCE_SENTINELLE,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [sin, (, 1, +, x, )]
///   rpn:    [1, x, +, sin]
pub fn to_postfix(tokens: &[Tok]) -> Result<Postfixe, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();
    let mut variables = VariableTable::new();

    for tok in tokens.iter().cloned() {
        match tok.genre {
            TokKind::Nombre => out.push(tok),

            TokKind::Variable => {
                variables.inscrire(&tok.texte);
                out.push(tok);
            }

            TokKind::Operateur => {
                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if precedence(top) < p_tok {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }

            TokKind::Fonction | TokKind::ParG => ops.push(tok),

            TokKind::ParD => loop {
                match ops.pop() {
                    Some(top) if top.genre == TokKind::ParG => break,
                    Some(top) => out.push(top),
                    None => return Err(ErreurNoyau::syntaxe("parenthèse droite sans ouvrante")),
                }
            },
        }
    }

    // vide la pile ops (les '(' orphelines passent en sortie, détectées juste après)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    if out.iter().any(|t| t.genre == TokKind::ParG) {
        return Err(ErreurNoyau::syntaxe("parenthèse gauche non fermée"));
    }

    if let Some(inconnu) = out
        .iter()
        .find(|t| t.genre == TokKind::Fonction && Fonction::from_name(&t.texte).is_none())
    {
        return Err(ErreurNoyau::UnknownExpression(inconnu.texte.clone()));
    }

    let post = Postfixe { jetons: out, variables };
    debug!("rpn: {}", post.texte());
    Ok(post)
}
