//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, expression lue, valeurs des
//! variables, résultat, erreur, démarche) et offrir des opérations simples
//! (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune lecture d’expression ici (c’est vue.rs qui appelle le noyau).
//! - L’expression lue est gardée : changer une valeur ne relit PAS le texte.
//! - Changer la précision reformate la dernière valeur sans ré-évaluer.

use calculatrice_rpn::noyau::format::{format_resultat, CHIFFRES_MAX};
use calculatrice_rpn::noyau::options::MARQUEUR_DEFAUT;
use calculatrice_rpn::Expression;

/// Précision d’affichage par défaut.
const CHIFFRES_DEFAUT: usize = 10;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub plan: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub marqueur: char,

    // --- expression lue (plan partagé) + valeurs éditées, dans l’ordre des variables ---
    pub expression: Option<Expression>,
    pub valeurs: Vec<f64>,

    // --- sorties ---
    pub resultat: String,
    pub derniere_valeur: Option<f64>,
    pub erreur: String,
    pub resultat_dispo: bool,
    pub nb_evaluations: usize,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub chiffres: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            marqueur: MARQUEUR_DEFAUT,
            expression: None,
            valeurs: Vec::new(),
            resultat: String::new(),
            derniere_valeur: None,
            erreur: String::new(),
            resultat_dispo: false,
            nb_evaluations: 0,
            demarche: Demarche::default(),
            chiffres: CHIFFRES_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.chiffres = CHIFFRES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (l’expression lue reste évaluable).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche + expression lue.
    pub fn clear_resultats(&mut self) {
        self.expression = None;
        self.valeurs.clear();
        self.resultat.clear();
        self.derniere_valeur = None;
        self.erreur.clear();
        self.resultat_dispo = false;
        self.nb_evaluations = 0;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur (le dernier résultat affiché est coupé).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.derniere_valeur = None;
        self.resultat_dispo = false;
        self.focus_entree = true;
    }

    /// Nouvelle expression lue : valeurs reprises de l’expression (0.0 par défaut).
    pub fn set_expression(&mut self, expression: Expression) {
        self.demarche = Demarche {
            jetons: expression.jetons().to_string(),
            rpn: expression.rpn().to_string(),
            plan: expression.plan().to_string(),
            note: String::new(),
        };
        self.valeurs = expression.variables().values().to_vec();
        self.expression = Some(expression);
        self.nb_evaluations = 0;
    }

    /// Nouvelle évaluation : compte dans la note de démarche.
    pub fn set_resultat(&mut self, valeur: f64) {
        self.erreur.clear();
        self.derniere_valeur = Some(valeur);
        self.resultat = format_resultat(valeur, self.chiffres);
        self.resultat_dispo = true;
        self.nb_evaluations += 1;
        self.demarche.note = format!(
            "Lecture unique → {} évaluation(s) du même plan.",
            self.nb_evaluations
        );
    }

    /// Garde-fou : limite la précision affichée.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(0, CHIFFRES_MAX);
        if let Some(v) = self.derniere_valeur {
            self.resultat = format_resultat(v, self.chiffres);
        }
        self.focus_entree = true;
    }
}
