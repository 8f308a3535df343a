// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile de f64
//
// Règles:
// - Fonction : empilée, elle sort juste après la parenthèse fermante de son
//   argument (une fonction doit être suivie de '(').
// - Opérateur : on dépile tant que le sommet est un opérateur de précédence >=
//   (donc associativité à gauche partout, y compris pour ^).
// - '(' restées ouvertes en fin de lecture : ignorées (complétion implicite).

use super::erreur::ErreurEvaluation;
use super::fonctions::ModeAngle;
use super::jetons::{Operateur, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Num(90), RPar, Op(Plus), Num(1)]
///   rpn:    [Num(90), Fonction(Sin), Num(1), Op(Plus)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEvaluation> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for (i, tok) in tokens.iter().copied().enumerate() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Fonction(f) => {
                if tokens.get(i + 1) != Some(&Tok::LPar) {
                    return Err(ErreurEvaluation::mal_formee(format!(
                        "{} doit être suivie de '('",
                        f.nom()
                    )));
                }
                ops.push(tok);
            }

            Tok::Op(op) => {
                while let Some(Tok::Op(sommet)) = ops.last() {
                    if sommet.precedence() >= op.precedence() {
                        out.push(Tok::Op(*sommet));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => {
                            return Err(ErreurEvaluation::mal_formee(
                                "parenthèse fermante sans ouvrante",
                            ))
                        }
                    }
                }

                // si une fonction est au sommet, elle s’attache à son argument
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(t) = ops.pop() {
        if t != Tok::LPar {
            out.push(t);
        }
    }

    Ok(out)
}

/// Évalue une RPN. La pile doit contenir exactement une valeur à la fin.
pub fn eval_rpn(rpn: &[Tok], mode: ModeAngle) -> Result<f64, ErreurEvaluation> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(op) => {
                let b = pile.pop().ok_or_else(operande_manquant)?;
                let a = pile.pop().ok_or_else(operande_manquant)?;
                pile.push(appliquer_operateur(a, b, op)?);
            }

            Tok::Fonction(f) => {
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::mal_formee(format!("{} sans argument", f.nom())))?;
                pile.push(f.appliquer(a, mode)?);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEvaluation::mal_formee("parenthèse inattendue en RPN"))
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        [] => Err(ErreurEvaluation::mal_formee("aucune valeur")),
        _ => Err(ErreurEvaluation::mal_formee("valeurs sans opérateur")),
    }
}

fn operande_manquant() -> ErreurEvaluation {
    ErreurEvaluation::mal_formee("opérande manquant")
}

fn appliquer_operateur(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurEvaluation> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurEvaluation::DivisionParZero);
            }
            Ok(a / b)
        }
        Operateur::Puissance => {
            if a == 0.0 && b < 0.0 {
                return Err(ErreurEvaluation::PuissanceInvalide(
                    "zéro élevé à une puissance négative".into(),
                ));
            }
            if a < 0.0 && b.fract() != 0.0 {
                return Err(ErreurEvaluation::PuissanceInvalide(
                    "base négative avec exposant non entier (résultat complexe)".into(),
                ));
            }
            Ok(a.powf(b))
        }
    }
}
