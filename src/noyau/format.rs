// src/noyau/format.rs
//
// Affichage d’un résultat réel (côté vue) : précision bornée, zéros finaux
// retirés, NaN / infinis rendus lisibles.

/// Précision d’affichage maximale utile pour un f64.
pub const CHIFFRES_MAX: usize = 17;

/// `v` avec au plus `chiffres` décimales, sans zéros finaux inutiles.
pub fn format_resultat(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return "NaN (hors domaine)".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+∞" } else { "-∞" }.to_string();
    }

    let mut s = format!("{:.*}", chiffres.min(CHIFFRES_MAX), v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // "-0" -> "0"
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
