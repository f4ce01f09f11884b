// src/noyau/variables.rs
//
// Table des variables : (nom, valeur) ordonnés par première apparition.
// L’index d’un nom (son “slot”) est fixé à la lecture et ne bouge plus.

use super::erreur::ErreurNoyau;

/// Valeur d’une variable jamais affectée.
pub const VALEUR_DEFAUT: f64 = 0.0;

/// Affectation nommée (forme `Var { name, value }`).
#[derive(Clone, Debug, PartialEq)]
pub struct Var {
    pub name: String,
    pub value: f64,
}

impl Var {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableTable {
    noms: Vec<String>,
    valeurs: Vec<f64>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot du nom ; l’ajoute en fin de table s’il est nouveau.
    pub fn inscrire(&mut self, nom: &str) -> usize {
        if let Some(slot) = self.slot(nom) {
            return slot;
        }
        self.noms.push(nom.to_string());
        self.valeurs.push(VALEUR_DEFAUT);
        self.noms.len() - 1
    }

    /// Recherche linéaire (les tables sont petites).
    pub fn slot(&self, nom: &str) -> Option<usize> {
        self.noms.iter().position(|n| n == nom)
    }

    pub fn bind(&mut self, nom: &str, valeur: f64) -> Result<(), ErreurNoyau> {
        let slot = self
            .slot(nom)
            .ok_or_else(|| ErreurNoyau::UnknownVariable(nom.to_string()))?;
        self.valeurs[slot] = valeur;
        Ok(())
    }

    /// Affectation positionnelle, dans l’ordre de la table.
    pub fn bind_values(&mut self, valeurs: &[f64]) -> Result<(), ErreurNoyau> {
        if valeurs.len() != self.valeurs.len() {
            return Err(ErreurNoyau::VariableMismatch {
                attendu: self.valeurs.len(),
                recu: valeurs.len(),
            });
        }
        self.valeurs.copy_from_slice(valeurs);
        Ok(())
    }

    /// Affectations nommées, tout ou rien : chaque nom est résolu avant la
    /// première écriture.
    pub fn bind_vars(&mut self, vars: &[Var]) -> Result<(), ErreurNoyau> {
        let slots = vars
            .iter()
            .map(|v| {
                self.slot(&v.name)
                    .ok_or_else(|| ErreurNoyau::UnknownVariable(v.name.clone()))
            })
            .collect::<Result<Vec<usize>, ErreurNoyau>>()?;
        for (slot, v) in slots.into_iter().zip(vars) {
            self.valeurs[slot] = v.value;
        }
        Ok(())
    }

    pub fn get(&self, nom: &str) -> Option<f64> {
        self.slot(nom).map(|s| self.valeurs[s])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.noms.iter().map(String::as_str)
    }

    pub fn values(&self) -> &[f64] {
        &self.valeurs
    }

    pub fn len(&self) -> usize {
        self.noms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.noms.is_empty()
    }
}
