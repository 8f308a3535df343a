//! Calculatrice scientifique
//!
//! - `noyau` : parseur/évaluateur sans état (jetons -> RPN -> valeur)
//! - `app`   : session (machine à états pilotée par les touches)

pub mod app;
pub mod noyau;
