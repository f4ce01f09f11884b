// src/noyau/machine.rs
//
// Évaluateur : un seul passage gauche -> droite sur le plan, une pile de f64.
// Aucune reclassification de jetons ici : tout est résolu par plan.rs.

use log::{trace, warn};

use super::erreur::ErreurNoyau;
use super::plan::{Instr, Plan};

impl Plan {
    /// Évalue le plan avec les valeurs courantes des slots.
    ///
    /// `valeurs[i]` est la valeur du slot `i` ; il en faut au moins `nb_variables()`.
    /// NaN / ±inf sortent tels quels (pas d’erreur de domaine).
    pub fn evaluer(&self, valeurs: &[f64]) -> Result<f64, ErreurNoyau> {
        if valeurs.len() < self.nb_variables() {
            return Err(ErreurNoyau::VariableMismatch {
                attendu: self.nb_variables(),
                recu: valeurs.len(),
            });
        }

        let mut pile: Vec<f64> = Vec::with_capacity(self.profondeur_max());

        for instr in self.instrs() {
            match *instr {
                Instr::Nombre(v) => pile.push(v),

                Instr::Variable(slot) => pile.push(valeurs[slot]),

                Instr::Operateur(op) => {
                    let (r, l) = match (pile.pop(), pile.pop()) {
                        (Some(r), Some(l)) => (r, l),
                        _ => {
                            return Err(ErreurNoyau::syntaxe(format!(
                                "opérande manquant pour '{}'",
                                op.symbole()
                            )))
                        }
                    };
                    pile.push(op.appliquer(l, r));
                }

                Instr::Fonction(func) => {
                    let x = pile.pop().ok_or_else(|| {
                        ErreurNoyau::syntaxe(format!("argument manquant pour '{}'", func.nom()))
                    })?;
                    let v = func.appliquer(x).ok_or_else(|| {
                        warn!("fonction réservée appelée : {}", func.nom());
                        ErreurNoyau::UnsupportedFunction(func.nom().to_string())
                    })?;
                    pile.push(v);
                }
            }
        }

        match pile.as_slice() {
            [v] => {
                trace!("evaluer({valeurs:?}) = {v}");
                Ok(*v)
            }
            reste => Err(ErreurNoyau::Incoherence(reste.len())),
        }
    }
}
