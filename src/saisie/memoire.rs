// src/saisie/memoire.rs
//
// Registre mémoire (MS / MR / M+ / M- / MC).
// Deux variantes : une seule case, ou une pile (plus récente en tête).

use serde::Deserialize;

/// Capacité mémoire vue par la session. Le shell choisit la variante.
pub trait Registre {
    /// MS
    fn stocker(&mut self, valeur: f64);

    /// Cases, plus récente en tête.
    fn emplacements(&self) -> &[f64];

    fn tete_mut(&mut self) -> Option<&mut f64>;

    /// MC
    fn effacer(&mut self);

    /// MR
    fn tete(&self) -> Option<f64> {
        self.emplacements().first().copied()
    }

    fn est_vide(&self) -> bool {
        self.emplacements().is_empty()
    }

    /// M+ : registre vide => se comporte comme MS.
    fn ajouter(&mut self, valeur: f64) {
        if self.est_vide() {
            self.stocker(valeur);
        } else if let Some(t) = self.tete_mut() {
            *t += valeur;
        }
    }

    /// M- : registre vide => se comporte comme MS (valeur stockée telle quelle).
    fn soustraire(&mut self, valeur: f64) {
        if self.est_vide() {
            self.stocker(valeur);
        } else if let Some(t) = self.tete_mut() {
            *t -= valeur;
        }
    }
}

/// Une seule case : MS écrase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistreSimple {
    case: Option<f64>,
}

impl Registre for RegistreSimple {
    fn stocker(&mut self, valeur: f64) {
        self.case = Some(valeur);
    }

    fn emplacements(&self) -> &[f64] {
        self.case.as_slice()
    }

    fn tete_mut(&mut self) -> Option<&mut f64> {
        self.case.as_mut()
    }

    fn effacer(&mut self) {
        self.case = None;
    }
}

/// Pile : MS empile en tête, M+/M- ajustent la tête.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrePile {
    cases: Vec<f64>,
}

impl Registre for RegistrePile {
    fn stocker(&mut self, valeur: f64) {
        self.cases.insert(0, valeur);
    }

    fn emplacements(&self) -> &[f64] {
        &self.cases
    }

    fn tete_mut(&mut self) -> Option<&mut f64> {
        self.cases.first_mut()
    }

    fn effacer(&mut self) {
        self.cases.clear();
    }
}

impl<R: Registre + ?Sized> Registre for Box<R> {
    fn stocker(&mut self, valeur: f64) {
        (**self).stocker(valeur)
    }

    fn emplacements(&self) -> &[f64] {
        (**self).emplacements()
    }

    fn tete_mut(&mut self) -> Option<&mut f64> {
        (**self).tete_mut()
    }

    fn effacer(&mut self) {
        (**self).effacer()
    }
}

/// Variante choisie dans les réglages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeRegistre {
    Simple,
    #[default]
    Pile,
}

impl TypeRegistre {
    pub fn construire(self) -> Box<dyn Registre> {
        match self {
            TypeRegistre::Simple => Box::new(RegistreSimple::default()),
            TypeRegistre::Pile => Box::new(RegistrePile::default()),
        }
    }
}
