// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// - Enter évalue (quand le champ est focus) : lecture + première évaluation
// - Panneau variables : chaque valeur modifiée => bind + evaluate, SANS relire le texte
// - Exemples : expressions de démonstration chargées d’un clic

use eframe::egui;
use log::debug;

use calculatrice_rpn::noyau::format::CHIFFRES_MAX;
use calculatrice_rpn::{Expression, Options};

use super::etat::AppCalc;

/// Exemples (texte, marqueur).
const EXEMPLES: [(&str, char); 3] = [
    ("sin(rad(12.67)*exp(1.13)) + TAN(COS(RAD(32.1)))*LOG(12)", '$'),
    (
        "sin(rad('var2')*exp('var1')) + TAN(COS(RAD('var3')))*LOG('var4')",
        '\'',
    ),
    ("-12.4 + exp(sin(rad($x$))) * log10($y$)", '$'),
];

/// Fonctions proposées en boutons (atan2 est réservée, donc absente).
const FONCTIONS: [&str; 15] = [
    "log", "log10", "sin", "cos", "tan", "cot", "asin", "acos", "atan", "acot", "deg", "rad",
    "sqrt", "exp", "abs",
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);
                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_exemples(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let hint = format!("Ex: -12.4 + exp(sin(rad({m}x{m}))) * log10(96)", m = self.marqueur);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(hint)
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats + expression lue ; AC = tout
            if ui.button("C").on_hover_text("Efface seulement l’entrée").clicked() {
                self.clear_entree();
            }
            if ui
                .button("CLR")
                .on_hover_text("Efface résultat + variables + démarche")
                .clicked()
            {
                self.clear_resultats();
            }
            if ui.button("AC").on_hover_text("Remise à zéro totale").clicked() {
                self.reset_total();
            }

            ui.separator();

            ui.label("Affichage :");
            let mut d = self.chiffres as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }

            ui.separator();

            ui.label("Marqueur :");
            ui.selectable_value(&mut self.marqueur, '$', "$x$");
            ui.selectable_value(&mut self.marqueur, '\'', "'x'");
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "%", "^"] {
                self.bouton_insert(ui, s, s);
            }
            ui.separator();
            let pi = format!("{m}pi{m}", m = self.marqueur);
            self.bouton_insert(ui, "π", &pi);
            let x = format!("{m}x{m}", m = self.marqueur);
            self.bouton_insert(ui, "x", &x);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.horizontal_wrapped(|ui| {
            for f in FONCTIONS {
                let insert = format!("{f}(");
                self.bouton_insert(ui, f, &insert);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Une ligne par variable ; une valeur modifiée relance l’évaluation seule.
    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        let noms: Vec<String> = match &self.expression {
            Some(e) => e.variable_names().iter().map(|s| s.to_string()).collect(),
            None => return,
        };
        if noms.is_empty() {
            return;
        }

        ui.label("Variables :");
        let mut change = false;
        egui::Grid::new("variables_rpn")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (nom, valeur) in noms.iter().zip(self.valeurs.iter_mut()) {
                    ui.monospace(nom);
                    change |= ui.add(egui::DragValue::new(valeur).speed(0.1)).changed();
                    ui.end_row();
                }
            });

        if change {
            self.reevaluer_via_noyau();
        }
        ui.add_space(6.0);
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.resultat_dispo {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Plan", "demarche_plan", &self.demarche.plan);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_exemples(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Exemples")
            .default_open(false)
            .show(ui, |ui| {
                for (texte, marqueur) in EXEMPLES {
                    if ui.button(texte).clicked() {
                        self.entree = texte.to_string();
                        self.marqueur = marqueur;
                        self.eval_via_noyau();
                    }
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Lit l’entrée (une fois), garde l’expression, puis évalue.
    fn eval_via_noyau(&mut self) {
        self.focus_entree = true;

        let options = match Options::default().with_marqueur(self.marqueur) {
            Ok(o) => o,
            Err(e) => {
                self.set_erreur(e.to_string());
                return;
            }
        };

        match Expression::parse_avec(&self.entree, &options) {
            Ok(expression) => {
                debug!("vue : nouvelle expression {:?}", expression.rpn());
                self.set_expression(expression);
                self.reevaluer_via_noyau();
            }
            Err(e) => {
                self.clear_resultats();
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Ré-affecte les valeurs éditées puis ré-évalue le plan déjà lu.
    fn reevaluer_via_noyau(&mut self) {
        let Some(expression) = self.expression.as_mut() else {
            return;
        };

        let res = expression
            .bind_values(&self.valeurs)
            .and_then(|()| expression.evaluate());

        match res {
            Ok(v) => self.set_resultat(v),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}
