//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier les touches du pavé (boutons ou clavier) à la session, et garder
//! l’état purement visuel (panneau actif, panneau visible).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session`.
//! - Les réactions de mise en page ne touchent jamais la session.

use calculatrice_pave::noyau::{Operateur, OperateurUnaire};
use calculatrice_pave::saisie::Registre;
use calculatrice_pave::{Reglages, Session};

/// Une touche du pavé ou de la barre mémoire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Egal,
    Unaire(OperateurUnaire),
    Pourcentage,
    Signe,
    ToutEffacer,
    EffacerEntree,
    RetourArriere,
    MemoireStocker,
    MemoireRappeler,
    MemoireAjouter,
    MemoireSoustraire,
    MemoireEffacer,
}

impl Touche {
    /// Texte du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operateur(op) => op.to_string(),
            Touche::Egal => "=".into(),
            Touche::Unaire(OperateurUnaire::Racine) => "√x".into(),
            Touche::Unaire(OperateurUnaire::Carre) => "x²".into(),
            Touche::Unaire(OperateurUnaire::Inverse) => "1/x".into(),
            Touche::Pourcentage => "%".into(),
            Touche::Signe => "±".into(),
            Touche::ToutEffacer => "C".into(),
            Touche::EffacerEntree => "CE".into(),
            Touche::RetourArriere => "⌫".into(),
            Touche::MemoireStocker => "MS".into(),
            Touche::MemoireRappeler => "MR".into(),
            Touche::MemoireAjouter => "M+".into(),
            Touche::MemoireSoustraire => "M-".into(),
            Touche::MemoireEffacer => "MC".into(),
        }
    }

    /// Saisie texte du clavier physique (Enter / Backspace / Escape sont gérés à part).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            ',' => Some(Touche::Chiffre('.')),
            '=' => Some(Touche::Egal),
            '%' => Some(Touche::Pourcentage),
            _ => Operateur::depuis_glyphe(c).map(Touche::Operateur),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panneau {
    #[default]
    Historique,
    Memoire,
}

pub struct AppCalc {
    pub session: Session<Box<dyn Registre>>,

    // --- UX ---
    pub panneau: Panneau,
    pub panneau_visible: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            session: Session::depuis_reglages(reglages),
            panneau: Panneau::default(),
            panneau_visible: true,
        }
    }

    /// Une touche => une transition de la session.
    pub fn appuyer(&mut self, touche: Touche) {
        let s = &mut self.session;
        match touche {
            Touche::Chiffre(c) => s.chiffre(c),
            Touche::Operateur(op) => s.operateur(op),
            Touche::Egal => s.egal(),
            Touche::Unaire(op) => s.unaire(op),
            Touche::Pourcentage => s.pourcentage(),
            Touche::Signe => s.basculer_signe(),
            Touche::ToutEffacer => s.tout_effacer(),
            Touche::EffacerEntree => s.effacer_entree(),
            Touche::RetourArriere => s.retour_arriere(),
            Touche::MemoireStocker => s.memoire_stocker(),
            Touche::MemoireRappeler => s.memoire_rappeler(),
            Touche::MemoireAjouter => s.memoire_ajouter(),
            Touche::MemoireSoustraire => s.memoire_soustraire(),
            Touche::MemoireEffacer => s.memoire_effacer(),
        }
    }

    pub fn basculer_panneau(&mut self) {
        self.panneau_visible = !self.panneau_visible;
    }
}
