//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile f64 (fonctions selon le mode d’angle)
//!
//! Fonction pure : aucun état partagé, les listes intermédiaires meurent avec l’appel.

use log::{debug, trace};

use super::erreur::ErreurEvaluation;
use super::fonctions::ModeAngle;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression infixe.
///
/// L’appelant équilibre les parenthèses s’il le souhaite ; des '(' restées
/// ouvertes en fin d’expression sont de toute façon complétées implicitement.
pub fn eval_expression(expr_str: &str, mode: ModeAngle) -> Result<f64, ErreurEvaluation> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEvaluation::ExpressionVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    if jetons.is_empty() {
        return Err(ErreurEvaluation::ExpressionVide);
    }
    trace!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!("rpn({s}) = {}", format_tokens(&rpn));

    // 3) Pile
    eval_rpn(&rpn, mode)
}
