// src/noyau/sentinelle.rs
//
// Sentinelles d’erreur : textes fixes affichés à la place d’une valeur.

use thiserror::Error;

/// Issue non numérique d’une opération du noyau.
///
/// Le texte (`Display`) est exactement celui qui s’affiche à l’écran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Sentinelle {
    /// Expression mal formée ou domaine invalide (ex: √ d’un négatif).
    #[error("Error")]
    Erreur,

    /// Division (explicite ou via 1/x) par zéro.
    #[error("Cannot divide by zero")]
    DivisionParZero,

    /// Valeur non finie ou saisie trop longue.
    #[error("Overflow")]
    Depassement,
}

/// Résultat discriminé de toutes les opérations du noyau.
pub type Resultat = Result<f64, Sentinelle>;

impl Sentinelle {
    pub const TOUTES: [Sentinelle; 3] = [
        Sentinelle::Erreur,
        Sentinelle::DivisionParZero,
        Sentinelle::Depassement,
    ];

    /// Texte affiché (sans allocation).
    pub fn texte(self) -> &'static str {
        match self {
            Sentinelle::Erreur => "Error",
            Sentinelle::DivisionParZero => "Cannot divide by zero",
            Sentinelle::Depassement => "Overflow",
        }
    }

    /// Reconnaît un texte de sentinelle (correspondance exacte).
    pub fn depuis_texte(s: &str) -> Option<Self> {
        Self::TOUTES.into_iter().find(|t| t.texte() == s)
    }
}
