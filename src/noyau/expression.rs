// src/noyau/expression.rs
//
// Expression en cours : liste ordonnée (opérande, opérateur)*, jamais un texte re-parsé.
// Les opérandes gardent leur texte de saisie ("0.", "-5") pour l’affichage.

use std::fmt;

use super::jetons::{lire_decimal, Jeton, Operateur};
use super::sentinelle::Sentinelle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Terme {
    Operande(String),
    Operateur(Operateur),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expression {
    termes: Vec<Terme>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// `a op b` : utilisé pour le « = » répété.
    pub fn binaire(gauche: &str, op: Operateur, droite: &str) -> Self {
        let mut e = Self::new();
        e.push_operande(gauche);
        e.push_operateur(op);
        e.push_operande(droite);
        e
    }

    pub fn seule(operande: &str) -> Self {
        let mut e = Self::new();
        e.push_operande(operande);
        e
    }

    pub fn push_operande(&mut self, texte: &str) {
        self.termes.push(Terme::Operande(texte.to_string()));
    }

    pub fn push_operateur(&mut self, op: Operateur) {
        self.termes.push(Terme::Operateur(op));
    }

    pub fn clear(&mut self) {
        self.termes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.termes.is_empty()
    }

    pub fn termes(&self) -> &[Terme] {
        &self.termes
    }

    /// Jetons exacts, même contrat d’alternance que `tokenize`.
    pub fn jetons(&self) -> Result<Vec<Jeton>, Sentinelle> {
        let mut out = Vec::with_capacity(self.termes.len());
        for (i, t) in self.termes.iter().enumerate() {
            let attend_operande = i % 2 == 0;
            match (t, attend_operande) {
                (Terme::Operande(texte), true) => out.push(Jeton::Num(lire_decimal(texte)?)),
                (Terme::Operateur(op), false) => out.push(Jeton::Op(*op)),
                _ => return Err(Sentinelle::Erreur),
            }
        }
        if out.len() % 2 == 0 {
            // vide, ou opérateur final
            return Err(Sentinelle::Erreur);
        }
        Ok(out)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.termes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match t {
                Terme::Operande(s) => f.write_str(s)?,
                Terme::Operateur(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}
