//! src/reglages.rs
//!
//! Réglages de la session (fichier TOML optionnel, sinon valeurs par défaut).
//!
//! ```toml
//! longueur_max = 15    # 0 = seulement le garde-fou interne
//! memoire = "pile"     # ou "simple"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::saisie::memoire::TypeRegistre;

/// Longueur de saisie par défaut au-delà de laquelle un chiffre passe en "Overflow".
const LONGUEUR_MAX_DEFAUT: usize = 15;

/// Garde-fou : même configuré, le tampon reste borné.
const LONGUEUR_MAX_PLAFOND: usize = 400;

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {}: {source}", chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub longueur_max: usize,
    pub memoire: TypeRegistre,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            memoire: TypeRegistre::default(),
        }
    }
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        Ok(toml::from_str(texte)?)
    }

    pub fn charger(chemin: &Path) -> Result<Self, ErreurReglages> {
        let texte = fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    /// Plafond effectif de saisie (0 configuré => seul le garde-fou s’applique).
    pub fn plafond_saisie(&self) -> usize {
        match self.longueur_max {
            0 => LONGUEUR_MAX_PLAFOND,
            n => n.min(LONGUEUR_MAX_PLAFOND),
        }
    }
}
