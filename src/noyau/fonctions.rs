// src/noyau/fonctions.rs
//
// Fonctions scientifiques (unaires) + mode d’angle
// ------------------------------------------------
// - sin/cos/tan : argument converti degrés -> radians en mode Degres
// - asin/acos/atan : résultat reconverti en degrés en mode Degres
// - tan indéfinie à 90° + k·180° (tolérance 1e-10, mode Degres seulement)
// - hyp(a) = hypot(a, a) (convention à un seul argument)

use super::erreur::ErreurEvaluation;

/// Tolérance autour des asymptotes de tan (en degrés).
const TOLERANCE_TAN: f64 = 1e-10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Libellé court pour l’affichage ("DEG" / "RAD").
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Exp,
    Sqrt,
    Hyp,
    Asin,
    Acos,
    Atan,
}

impl Fonction {
    /// Ordre des touches de fonction (codes 110..=120).
    pub const TOUTES: [Fonction; 11] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Ln,
        Fonction::Exp,
        Fonction::Sqrt,
        Fonction::Hyp,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Exp => "exp",
            Fonction::Sqrt => "sqrt",
            Fonction::Hyp => "hyp",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
        }
    }

    /// Forme ouvrante insérée par la touche : "sin(", "sqrt(", ...
    pub fn ouverture(self) -> &'static str {
        match self {
            Fonction::Sin => "sin(",
            Fonction::Cos => "cos(",
            Fonction::Tan => "tan(",
            Fonction::Log => "log(",
            Fonction::Ln => "ln(",
            Fonction::Exp => "exp(",
            Fonction::Sqrt => "sqrt(",
            Fonction::Hyp => "hyp(",
            Fonction::Asin => "asin(",
            Fonction::Acos => "acos(",
            Fonction::Atan => "atan(",
        }
    }

    /// Nom insensible à la casse ("SIN" == "sin").
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let n = nom.to_ascii_lowercase();
        Self::TOUTES.into_iter().find(|f| f.nom() == n)
    }

    /// Applique la fonction à `a` selon le mode d’angle.
    pub fn appliquer(self, a: f64, mode: ModeAngle) -> Result<f64, ErreurEvaluation> {
        let en_degres = mode == ModeAngle::Degres;
        let angle = if en_degres { a.to_radians() } else { a };
        let vers_mode = |r: f64| if en_degres { r.to_degrees() } else { r };

        let v = match self {
            Fonction::Sin => angle.sin(),
            Fonction::Cos => angle.cos(),
            Fonction::Tan => {
                if en_degres && sur_asymptote_tan(a) {
                    return Err(ErreurEvaluation::TangenteIndefinie {
                        degres: a.trunc(),
                    });
                }
                angle.tan()
            }

            Fonction::Log => {
                if a <= 0.0 {
                    return Err(hors_domaine("log d’un nombre non positif"));
                }
                a.log10()
            }
            Fonction::Ln => {
                if a <= 0.0 {
                    return Err(hors_domaine("ln d’un nombre non positif"));
                }
                a.ln()
            }
            Fonction::Exp => a.exp(),
            Fonction::Sqrt => {
                if a < 0.0 {
                    return Err(hors_domaine("racine carrée d’un nombre négatif"));
                }
                a.sqrt()
            }

            Fonction::Asin => {
                if !(-1.0..=1.0).contains(&a) {
                    return Err(hors_domaine("asin attend un argument dans [-1, 1]"));
                }
                vers_mode(a.asin())
            }
            Fonction::Acos => {
                if !(-1.0..=1.0).contains(&a) {
                    return Err(hors_domaine("acos attend un argument dans [-1, 1]"));
                }
                vers_mode(a.acos())
            }
            Fonction::Atan => vers_mode(a.atan()),

            Fonction::Hyp => a.hypot(a),
        };

        Ok(v)
    }
}

/// Vrai si `degres` est à moins de 1e-10 de 90 + k·180.
fn sur_asymptote_tan(degres: f64) -> bool {
    let r = (degres - 90.0).rem_euclid(180.0);
    r < TOLERANCE_TAN || 180.0 - r < TOLERANCE_TAN
}

fn hors_domaine(msg: &str) -> ErreurEvaluation {
    ErreurEvaluation::HorsDomaine(msg.to_string())
}
