// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis l’évaluer sur des rationnels (aucun évaluateur générique)
//
// Règles:
// - × et ÷ passent avant + et −
// - même précédence : gauche à droite

use num_rational::BigRational;
use num_traits::Zero;

use super::jetons::{Jeton, Operateur};
use super::sentinelle::Sentinelle;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, ×, 4]
///   rpn:    [2, 3, 4, ×, +]
pub fn to_rpn(tokens: &[Jeton]) -> Result<Vec<Jeton>, Sentinelle> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    // Sert à refuser deux opérandes ou deux opérateurs de suite.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Jeton::Num(_) => {
                if prev_was_value {
                    return Err(Sentinelle::Erreur);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Jeton::Op(op) => {
                if !prev_was_value {
                    return Err(Sentinelle::Erreur);
                }

                // associativité gauche : on sort tout ce qui lie au moins autant
                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        ops.pop();
                        out.push(Jeton::Op(top));
                    } else {
                        break;
                    }
                }

                ops.push(op);
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(Sentinelle::Erreur);
    }

    while let Some(op) = ops.pop() {
        out.push(Jeton::Op(op));
    }

    Ok(out)
}

/// Évalue une RPN exactement.
///
/// - division par zéro exact => `Cannot divide by zero`
/// - pile incohérente => `Error`
pub fn eval_rpn(rpn: &[Jeton]) -> Result<BigRational, Sentinelle> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn {
        match tok {
            Jeton::Num(r) => st.push(r.clone()),

            Jeton::Op(op) => {
                let b = st.pop().ok_or(Sentinelle::Erreur)?;
                let a = st.pop().ok_or(Sentinelle::Erreur)?;

                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b.is_zero() {
                            return Err(Sentinelle::DivisionParZero);
                        }
                        a / b
                    }
                };

                st.push(v);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(Sentinelle::Erreur),
    }
}
