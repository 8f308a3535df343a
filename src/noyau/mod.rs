//! Noyau de calcul (sans état)
//!
//! Organisation interne :
//! - erreur.rs    : ErreurEvaluation (une variante par cause)
//! - jetons.rs    : tokenisation (moins unaire fusionné au nombre)
//! - rpn.rs       : shunting-yard + évaluation de la RPN
//! - fonctions.rs : sin/cos/tan/... + mode d’angle (degrés / radians)
//! - format.rs    : affichage des résultats (précision fixe, zéros retirés)
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;


// API publique minimale
pub use erreur::ErreurEvaluation;
pub use eval::eval_expression;
pub use fonctions::{Fonction, ModeAngle};
pub use format::{format_nombre, PRECISION_DEFAUT};
pub use jetons::Operateur;
