//! Saisie : machine d’état du pavé + panneaux (mémoire, historique).
//!
//! - session.rs    : transitions (chiffres, opérateurs, =, unaires, %, C/CE/⌫, mémoire)
//! - memoire.rs    : registre MS/MR/M+/M-/MC (case simple ou pile)
//! - historique.rs : journal des calculs

pub mod historique;
pub mod memoire;
pub mod session;

#[cfg(test)]
mod tests_session;

pub use historique::EntreeHistorique;
pub use memoire::{Registre, RegistrePile, RegistreSimple, TypeRegistre};
pub use session::Session;
