// src/noyau/format.rs
//
// Texte EXACT affiché : groupes de milliers, 10 décimales max, notation scientifique
// hors de [1e-15, 1e15). Fonction pure : sert à l’écran, à l’historique et à la mémoire.

use super::sentinelle::Sentinelle;

/// |x| >= SEUIL_HAUT => notation scientifique.
const SEUIL_HAUT: f64 = 1e15;

/// 0 < |x| < SEUIL_BAS => notation scientifique.
const SEUIL_BAS: f64 = 1e-15;

/// Chiffres significatifs de la mantisse scientifique.
const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Décimales max en notation fixe.
const DECIMALES: usize = 10;

/// Ce que l’écran peut recevoir : une valeur, ou un texte (tampon de saisie, sentinelle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Affichable<'a> {
    Nombre(f64),
    Texte(&'a str),
}

impl From<f64> for Affichable<'_> {
    fn from(n: f64) -> Self {
        Affichable::Nombre(n)
    }
}

impl<'a> From<&'a str> for Affichable<'a> {
    fn from(t: &'a str) -> Self {
        Affichable::Texte(t)
    }
}

impl<'a> From<&'a String> for Affichable<'a> {
    fn from(t: &'a String) -> Self {
        Affichable::Texte(t.as_str())
    }
}

impl From<Sentinelle> for Affichable<'static> {
    fn from(s: Sentinelle) -> Self {
        Affichable::Texte(s.texte())
    }
}

/// API publique : texte exact de l’écran.
///
/// Priorités :
/// 1. sentinelle ou saisie finissant par "." => inchangé
/// 2. non fini => "Overflow" (texte illisible => "Error")
/// 3. notation scientifique hors seuils
/// 4. entier groupé
/// 5. décimal groupé, 10 décimales max, sans zéros finaux
pub fn format_number_for_display<'a>(valeur: impl Into<Affichable<'a>>) -> String {
    match valeur.into() {
        Affichable::Nombre(n) => formater_nombre(n),
        Affichable::Texte(t) => formater_texte(t),
    }
}

fn formater_texte(t: &str) -> String {
    if Sentinelle::depuis_texte(t).is_some() || t.ends_with('.') {
        return t.to_string();
    }

    // Accepte un texte déjà formaté (idempotence).
    let brut: String = t.chars().filter(|&c| c != ',').collect();
    match brut.trim().parse::<f64>() {
        Ok(n) => formater_nombre(n),
        Err(_) => Sentinelle::Erreur.texte().to_string(),
    }
}

fn formater_nombre(n: f64) -> String {
    if !n.is_finite() {
        return Sentinelle::Depassement.texte().to_string();
    }

    // Seuils testés sur la valeur arrondie à 10 chiffres significatifs :
    // 9.99999999999e-16 s’affiche comme 1e-15, donc en notation fixe.
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, n);
    let arrondi = sci.parse::<f64>().map_or(n.abs(), f64::abs);
    if arrondi >= SEUIL_HAUT || (arrondi != 0.0 && arrondi < SEUIL_BAS) {
        return format_scientifique(&sci);
    }

    let abs = n.abs();

    let corps = if n.fract() == 0.0 {
        grouper(&format!("{abs:.0}"))
    } else {
        let fixe = format!("{:.*}", DECIMALES, abs);
        let fixe = fixe.trim_end_matches('0').trim_end_matches('.');
        match fixe.split_once('.') {
            Some((entier, frac)) => format!("{}.{frac}", grouper(entier)),
            None => grouper(fixe),
        }
    };

    // -0 et les négatifs arrondis à 0 s’affichent "0"
    if n < 0.0 && corps != "0" {
        format!("-{corps}")
    } else {
        corps
    }
}

/// 1.234567890e15 -> 1.23456789e+15
fn format_scientifique(brut: &str) -> String {
    let (mantisse, exp) = brut.split_once('e').unwrap_or((brut, "0"));

    let mantisse = if mantisse.contains('.') {
        mantisse.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantisse
    };

    let exp: i32 = exp.parse().unwrap_or(0);
    let signe = if exp < 0 { '-' } else { '+' };
    format!("{mantisse}e{signe}{}", exp.unsigned_abs())
}

/// "1234567" -> "1,234,567"
fn grouper(chiffres: &str) -> String {
    let mut out = String::with_capacity(chiffres.len() + chiffres.len() / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (chiffres.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
