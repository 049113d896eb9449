//! Calculatrice à pavé : noyau d’évaluation + machine d’état de saisie.
//!
//! Le shell (egui, natif + web) vit dans le binaire ; ici, rien ne dépend de l’UI.

pub mod noyau;
pub mod reglages;
pub mod saisie;

pub use reglages::Reglages;
pub use saisie::Session;
