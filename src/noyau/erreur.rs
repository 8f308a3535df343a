// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par cause, message lisible via Display.
// Aucune valeur partielle n’accompagne jamais une erreur.

/// Échec d’évaluation d’une expression.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ErreurEvaluation {
    #[error("expression vide")]
    ExpressionVide,

    /// Suite de jetons incohérente (pile vide, valeurs en trop, parenthèses).
    #[error("expression mal formée : {0}")]
    ExpressionMalFormee(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat complexe (0^-n, base négative avec exposant non entier).
    #[error("puissance invalide : {0}")]
    PuissanceInvalide(String),

    /// Angle tronqué à l’entier (gardé en f64 : pas de borne de plage).
    #[error("tangente indéfinie à {degres:.0} degrés")]
    TangenteIndefinie { degres: f64 },

    /// log/ln/sqrt/asin/acos hors de leur domaine.
    #[error("hors domaine : {0}")]
    HorsDomaine(String),

    #[error("opérateur inconnu : '{0}'")]
    OperateurInconnu(char),

    #[error("fonction inconnue : '{0}'")]
    FonctionInconnue(String),
}

impl ErreurEvaluation {
    pub(crate) fn mal_formee(msg: impl Into<String>) -> Self {
        Self::ExpressionMalFormee(msg.into())
    }
}
