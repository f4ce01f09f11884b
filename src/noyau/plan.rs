// src/noyau/plan.rs
//
// Précalcul : RPN symbolique -> plan typé (dispatch O(1) à l’évaluation).
//
// - Nombre     : littéral déjà converti en f64
// - Opérateur  : enum Operateur
// - Fonction   : enum Fonction (ordinal), nom résolu une seule fois
// - Variable   : index de slot dans la table
//
// Transformation pure : compile(p) == compile(p), sans effet de bord.
// On simule aussi la pile d’opérandes pour refuser dès la lecture
// un programme qui manquerait d’opérandes (ou en laisserait trop).

use std::fmt;

use super::erreur::ErreurNoyau;
use super::jetons::TokKind;
use super::rpn::Postfixe;
use super::tables::{Fonction, Operateur};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instr {
    Nombre(f64),
    Operateur(Operateur),
    Fonction(Fonction),
    Variable(usize),
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Nombre(v) => write!(f, "{v}"),
            Instr::Operateur(op) => write!(f, "{}", op.symbole()),
            Instr::Fonction(func) => write!(f, "{}#{}", func.nom(), func.ordinal()),
            Instr::Variable(slot) => write!(f, "${slot}"),
        }
    }
}

/// Plan immuable : partagé (Arc) entre évaluations et entre threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    instrs: Vec<Instr>,
    nb_variables: usize,
    profondeur_max: usize,
}

impl Plan {
    pub fn instrs(&self) -> &[Instr] {
        &self.instrs
    }

    /// Nombre de slots attendus par `evaluer`.
    pub fn nb_variables(&self) -> usize {
        self.nb_variables
    }

    /// Hauteur maximale de la pile d’opérandes (sert à la pré-allouer).
    pub fn profondeur_max(&self) -> usize {
        self.profondeur_max
    }

    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instr) in self.instrs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{instr}")?;
        }
        Ok(())
    }
}

fn nombre(texte: &str) -> Result<f64, ErreurNoyau> {
    texte
        .parse::<f64>()
        .map_err(|_| ErreurNoyau::syntaxe(format!("nombre invalide '{texte}'")))
}

/// Compile un programme postfixé en plan typé.
pub fn compile(post: &Postfixe) -> Result<Plan, ErreurNoyau> {
    let mut instrs = Vec::with_capacity(post.jetons.len());

    // simulation de la pile : (hauteur courante, hauteur max)
    let mut hauteur: usize = 0;
    let mut profondeur_max: usize = 0;

    for tok in &post.jetons {
        let instr = match tok.genre {
            TokKind::Nombre => Instr::Nombre(nombre(&tok.texte)?),

            TokKind::Variable => {
                let slot = post
                    .variables
                    .slot(&tok.texte)
                    .ok_or_else(|| ErreurNoyau::UnknownVariable(tok.texte.clone()))?;
                Instr::Variable(slot)
            }

            TokKind::Operateur => {
                let op = tok
                    .texte
                    .chars()
                    .next()
                    .and_then(Operateur::from_char)
                    .ok_or_else(|| ErreurNoyau::syntaxe(format!("opérateur inconnu '{}'", tok.texte)))?;
                Instr::Operateur(op)
            }

            // défense en profondeur : rpn.rs a déjà validé les noms
            TokKind::Fonction => Instr::Fonction(
                Fonction::from_name(&tok.texte)
                    .ok_or_else(|| ErreurNoyau::UnknownExpression(tok.texte.clone()))?,
            ),

            TokKind::ParG | TokKind::ParD => {
                return Err(ErreurNoyau::syntaxe("parenthèse inattendue en RPN"));
            }
        };

        hauteur = match instr {
            Instr::Nombre(_) | Instr::Variable(_) => hauteur + 1,
            Instr::Operateur(op) => {
                if hauteur < 2 {
                    return Err(ErreurNoyau::syntaxe(format!(
                        "opérande manquant pour '{}'",
                        op.symbole()
                    )));
                }
                hauteur - 1
            }
            Instr::Fonction(func) => {
                if hauteur < 1 {
                    return Err(ErreurNoyau::syntaxe(format!(
                        "argument manquant pour '{}'",
                        func.nom()
                    )));
                }
                hauteur
            }
        };
        profondeur_max = profondeur_max.max(hauteur);

        instrs.push(instr);
    }

    if hauteur != 1 {
        return Err(ErreurNoyau::syntaxe(format!(
            "expression invalide ({hauteur} valeurs au lieu d’une)"
        )));
    }

    Ok(Plan {
        instrs,
        nb_variables: post.variables.len(),
        profondeur_max,
    })
}
