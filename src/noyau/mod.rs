//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - sentinelle.rs : Error / Cannot divide by zero / Overflow
//! - jetons.rs     : opérateurs, tokenisation, littéraux décimaux exacts
//! - expression.rs : expression de saisie (opérande, opérateur)*
//! - rpn.rs        : shunting-yard + évaluation rationnelle
//! - eval.rs       : pipeline complet + unaires + pourcentage
//! - format.rs     : texte affiché

pub mod eval;
pub mod expression;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod sentinelle;


// API publique minimale
pub use eval::{apply_percent, apply_unary, evaluate_expression, evaluer, OperateurUnaire};
pub use expression::Expression;
pub use format::{format_number_for_display, Affichable};
pub use jetons::Operateur;
pub use sentinelle::{Resultat, Sentinelle};
