// src/noyau/format.rs

/// Précision par défaut (chiffres après la virgule).
pub const PRECISION_DEFAUT: usize = 10;

/// Formate un résultat pour l’affichage.
///
/// - notation fixe à `precision` décimales
/// - zéros finaux retirés, puis le point final s’il ne reste rien derrière
/// - "-0" ramené à "0"
/// - non fini : "Error: NaN", "Infinity", "-Infinity" (pas d’erreur levée)
pub fn format_nombre(v: f64, precision: usize) -> String {
    if v.is_nan() {
        return "Error: NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut s = format!("{v:.precision$}");

    if s.contains('.') {
        let garde = s.trim_end_matches('0').len();
        s.truncate(garde);
        if s.ends_with('.') {
            s.pop();
        }
    }

    if s == "-0" {
        s = "0".to_string();
    }
    s
}
