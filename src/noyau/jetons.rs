// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::sentinelle::Sentinelle;

/// Au-delà, un littéral `…e+N` est refusé (Overflow) ; en deçà de -N il vaut 0.
const EXPOSANT_MAX: i64 = 4000;

/// Les quatre opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Glyphe d’affichage (celui du pavé, pas l’ASCII).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '−',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Accepte les glyphes du pavé et leurs équivalents ASCII.
    pub fn depuis_glyphe(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' | '−' => Some(Operateur::Moins),
            '*' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphe())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Num(BigRational),
    Op(Operateur),
}

fn pow10(n: u64) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

fn est_signe(c: char) -> bool {
    c == '-' || c == '−'
}

fn debut_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Lit un littéral décimal EXACT : `[-]chiffres[.chiffres][e[±]chiffres]`.
///
/// "0." et ".5" sont acceptés (saisie en cours). Les séparateurs de milliers ne le sont pas.
pub fn lire_decimal(s: &str) -> Result<BigRational, Sentinelle> {
    let s = s.trim();

    let (negatif, corps) = match s.strip_prefix('-').or_else(|| s.strip_prefix('−')) {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (mantisse, exposant) = match corps.find(['e', 'E']) {
        Some(i) => (&corps[..i], Some(&corps[i + 1..])),
        None => (corps, None),
    };

    let (entier, frac) = mantisse.split_once('.').unwrap_or((mantisse, ""));
    if entier.is_empty() && frac.is_empty() {
        return Err(Sentinelle::Erreur);
    }
    let tout_chiffres = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    if !tout_chiffres(entier) || !tout_chiffres(frac) {
        return Err(Sentinelle::Erreur);
    }

    let exp: i64 = match exposant {
        None => 0,
        Some(e) => e.parse().map_err(|_| Sentinelle::Erreur)?,
    };

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or(Sentinelle::Erreur)?;

    if n.is_zero() || exp < -EXPOSANT_MAX {
        return Ok(BigRational::zero());
    }
    if exp > EXPOSANT_MAX {
        return Err(Sentinelle::Depassement);
    }

    let echelle = exp - frac.len() as i64;
    let r = if echelle >= 0 {
        BigRational::from_integer(n * pow10(echelle as u64))
    } else {
        BigRational::new(n, pow10(echelle.unsigned_abs()))
    };

    Ok(if negatif { -r } else { r })
}

/// Tokenize une expression infixe : opérandes décimaux (signe collé optionnel)
/// alternant avec les quatre opérateurs.
///
/// L’alternance est vérifiée ici : opérateur en tête, deux opérateurs de suite,
/// opérateur final ou caractère inconnu => `Error`.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, Sentinelle> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    // Alterne : opérande attendu <-> opérateur attendu.
    let mut attend_operande = true;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if !attend_operande {
            let op = Operateur::depuis_glyphe(c).ok_or(Sentinelle::Erreur)?;
            out.push(Jeton::Op(op));
            attend_operande = true;
            i += 1;
            continue;
        }

        // Nombre, éventuellement signé : "-3", "−0.5"
        let debut = i;
        if est_signe(c) && i + 1 < chars.len() && debut_nombre(chars[i + 1]) {
            i += 1;
        }
        if !debut_nombre(chars[i]) {
            return Err(Sentinelle::Erreur);
        }
        while i < chars.len() && debut_nombre(chars[i]) {
            i += 1;
        }

        // Exposant : 1e+21, 5e-7
        if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
            i += 1;
            if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                i += 1;
            }
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }

        let litteral: String = chars[debut..i].iter().collect();
        out.push(Jeton::Num(lire_decimal(&litteral)?));
        attend_operande = false;
    }

    if out.is_empty() || attend_operande {
        return Err(Sentinelle::Erreur);
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    fn format_rat(r: &BigRational) -> String {
        if r.denom().is_one() {
            format!("{}", r.numer())
        } else {
            format!("{}/{}", r.numer(), r.denom())
        }
    }

    tokens
        .iter()
        .map(|t| match t {
            Jeton::Num(r) => format_rat(r),
            Jeton::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
