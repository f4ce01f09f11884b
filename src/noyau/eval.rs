//! Noyau: API publique (pipeline réel)
//!
//! texte -> jetons -> RPN (+ table des variables) -> plan -> évaluations (×N)
//!
//! Le plan est lu une seule fois puis partagé (`Arc`) ; seules les VALEURS
//! des variables changent entre deux évaluations.

use std::sync::Arc;

use log::debug;

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, tokenize};
use super::options::Options;
use super::plan::{compile, Plan};
use super::rpn::to_postfix;
use super::variables::{Var, VariableTable};

/// Expression compilée : plan immuable + table de valeurs propre.
///
/// `clone()` partage le plan et copie la table (une table par thread).
#[derive(Clone, Debug)]
pub struct Expression {
    source: String,
    jetons: String,
    rpn: String,
    plan: Arc<Plan>,
    variables: VariableTable,
}

impl Expression {
    /// Lit une expression avec les options par défaut (marqueur `$`).
    pub fn parse(expr: &str) -> Result<Self, ErreurNoyau> {
        Self::parse_avec(expr, &Options::default())
    }

    pub fn parse_avec(expr: &str, options: &Options) -> Result<Self, ErreurNoyau> {
        let jetons = tokenize(expr, options)?;
        let post = to_postfix(&jetons)?;
        let plan = compile(&post)?;

        debug!(
            "expression lue : {} instruction(s), {} variable(s)",
            plan.len(),
            post.variables.len()
        );

        Ok(Self {
            source: expr.to_string(),
            jetons: format_tokens(&jetons),
            rpn: post.texte(),
            plan: Arc::new(plan),
            variables: post.variables,
        })
    }

    /// Noms des variables, dans l’ordre de première apparition.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.names().collect()
    }

    pub fn bind(&mut self, name: &str, value: f64) -> Result<(), ErreurNoyau> {
        self.variables.bind(name, value)
    }

    /// Affecte toutes les variables d’un coup, dans l’ordre de `variable_names()`.
    pub fn bind_values(&mut self, values: &[f64]) -> Result<(), ErreurNoyau> {
        self.variables.bind_values(values)
    }

    /// Valeur courante d’une variable (0.0 si jamais affectée).
    pub fn value(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    pub fn evaluate(&self) -> Result<f64, ErreurNoyau> {
        self.plan.evaluer(self.variables.values())
    }

    /// Affecte chaque `Var` puis évalue. Un nom inconnu arrête tout (rien n’est évalué).
    pub fn evaluate_with(&mut self, vars: &[Var]) -> Result<f64, ErreurNoyau> {
        self.variables.bind_vars(vars)?;
        self.evaluate()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Jetons lus, séparés par un espace.
    pub fn jetons(&self) -> &str {
        &self.jetons
    }

    /// Programme postfixé, jetons séparés par un espace (noms de variables en clair).
    pub fn rpn(&self) -> &str {
        &self.rpn
    }

    pub fn plan(&self) -> &Arc<Plan> {
        &self.plan
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }
}

/// Raccourci : lit puis évalue une fois (variables éventuelles à 0.0).
pub fn eval_expression(expr: &str) -> Result<f64, ErreurNoyau> {
    Expression::parse(expr)?.evaluate()
}
