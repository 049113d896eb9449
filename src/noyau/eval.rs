//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> valeur exacte (rationnel) -> arrondi 10 décimales -> f64
//!
//! Les opérateurs unaires et le pourcentage travaillent sur un seul opérande `f64`.

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;

use super::expression::Expression;
use super::jetons::{format_tokens, tokenize, Jeton, Operateur};
use super::rpn::{eval_rpn, to_rpn};
use super::sentinelle::{Resultat, Sentinelle};

/// Plafond de décimales d’un résultat (anti « bruit » flottant).
pub const MAX_DECIMALES: u32 = 10;

/// √x, x², 1/x
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperateurUnaire {
    Racine,
    Carre,
    Inverse,
}

impl OperateurUnaire {
    /// Forme symbolique affichée sur la ligne d’expression : √(9), sqr(5), 1/(4).
    pub fn libelle(self, operande: &str) -> String {
        match self {
            OperateurUnaire::Racine => format!("√({operande})"),
            OperateurUnaire::Carre => format!("sqr({operande})"),
            OperateurUnaire::Inverse => format!("1/({operande})"),
        }
    }
}

impl FromStr for OperateurUnaire {
    type Err = Sentinelle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqrt" => Ok(OperateurUnaire::Racine),
            "square" => Ok(OperateurUnaire::Carre),
            "inverse" => Ok(OperateurUnaire::Inverse),
            _ => Err(Sentinelle::Erreur),
        }
    }
}

/// API publique : évalue un texte infixe (glyphes × ÷ − ou ASCII).
pub fn evaluate_expression(texte: &str) -> Resultat {
    let jetons = tokenize(texte)?;
    evaluer_jetons(&jetons)
}

/// Évalue l’expression construite par la session (sans repasser par du texte).
pub fn evaluer(expr: &Expression) -> Resultat {
    let jetons = expr.jetons()?;
    evaluer_jetons(&jetons)
}

fn evaluer_jetons(jetons: &[Jeton]) -> Resultat {
    let rpn = to_rpn(jetons)?;
    tracing::trace!(rpn = %format_tokens(&rpn), "évaluation");

    let exact = eval_rpn(&rpn)?;
    // résultat non fini issu d’une division => "Cannot divide by zero"
    arrondi_f64(&exact).map_err(|s| match s {
        Sentinelle::Depassement if contient_division(jetons) => Sentinelle::DivisionParZero,
        s => s,
    })
}

fn contient_division(jetons: &[Jeton]) -> bool {
    jetons
        .iter()
        .any(|j| matches!(j, Jeton::Op(Operateur::Divise)))
}

/// r -> f64, arrondi (demi loin de zéro) à MAX_DECIMALES.
///
/// La conversion passe par le texte `Ne-10` : arrondi correct côté f64.
fn arrondi_f64(r: &BigRational) -> Resultat {
    let echelle = BigRational::from_integer(BigInt::from(10).pow(MAX_DECIMALES));
    let n = (r * &echelle).round().to_integer();

    let v: f64 = format!("{n}e-{MAX_DECIMALES}")
        .parse()
        .map_err(|_| Sentinelle::Erreur)?;

    if v.is_finite() {
        Ok(v)
    } else {
        Err(Sentinelle::Depassement)
    }
}

/// √, carré, inverse sur un opérande. Aucun arrondi ici (le formateur tronque).
pub fn apply_unary(op: OperateurUnaire, operande: f64) -> Resultat {
    if !operande.is_finite() {
        return Err(Sentinelle::Depassement);
    }

    let v = match op {
        OperateurUnaire::Racine => {
            if operande < 0.0 {
                return Err(Sentinelle::Erreur);
            }
            operande.sqrt()
        }
        OperateurUnaire::Carre => operande * operande,
        OperateurUnaire::Inverse => {
            if operande == 0.0 {
                return Err(Sentinelle::DivisionParZero);
            }
            1.0 / operande
        }
    };

    // x² peut sortir des f64
    if v.is_finite() {
        Ok(v)
    } else {
        Err(Sentinelle::Depassement)
    }
}

/// x / 100, arrondi comme un résultat d’évaluation. Pas de cas d’erreur.
pub fn apply_percent(operande: f64) -> f64 {
    let cent = BigRational::from_integer(BigInt::from(100));
    BigRational::from_float(operande)
        .and_then(|r| arrondi_f64(&(r / cent)).ok())
        .unwrap_or(operande / 100.0)
}
