//! src/saisie/session.rs
//!
//! Machine d’état de la saisie : tampon affiché, expression en attente, verrou de résultat,
//! sentinelle d’erreur, dernier opérateur/opérande (« = » répété), historique, mémoire.
//!
//! Contrats :
//! - une action = une transition complète, pas d’effet caché hors de la session
//! - en erreur, tout est ignoré sauf C / CE / retour arrière (qui remettent à zéro)

use crate::noyau::{
    apply_percent, apply_unary, evaluer, format_number_for_display, Expression, Operateur,
    OperateurUnaire, Sentinelle,
};
use crate::reglages::Reglages;

use super::historique::{EntreeHistorique, Historique};
use super::memoire::{Registre, RegistrePile};

#[derive(Clone, Debug)]
pub struct Session<R: Registre = RegistrePile> {
    // --- saisie ---
    tampon: String,
    expression: Expression,
    // forme symbolique après un unaire : √(9), sqr(5)…
    libelle: Option<String>,

    // --- état ---
    verrouille: bool,
    erreur: Option<Sentinelle>,

    // --- « = » répété ---
    dernier_operateur: Option<Operateur>,
    dernier_operande: Option<String>,

    // --- panneaux ---
    historique: Historique,
    memoire: R,

    // --- paramètres ---
    plafond: usize,
}

impl Session<RegistrePile> {
    pub fn new() -> Self {
        Self::avec_registre(&Reglages::default(), RegistrePile::default())
    }
}

impl Default for Session<RegistrePile> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<Box<dyn Registre>> {
    /// Variante mémoire choisie par les réglages.
    pub fn depuis_reglages(reglages: &Reglages) -> Self {
        Self::avec_registre(reglages, reglages.memoire.construire())
    }
}

impl<R: Registre> Session<R> {
    pub fn avec_registre(reglages: &Reglages, memoire: R) -> Self {
        Self {
            tampon: "0".to_string(),
            expression: Expression::new(),
            libelle: None,
            verrouille: false,
            erreur: None,
            dernier_operateur: None,
            dernier_operande: None,
            historique: Historique::default(),
            memoire,
            plafond: reglages.plafond_saisie(),
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Tampon brut (chiffres en cours, ou texte f64 d’un résultat, ou sentinelle).
    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn texte_affiche(&self) -> String {
        format_number_for_display(self.tampon.as_str())
    }

    pub fn texte_expression(&self) -> String {
        match &self.libelle {
            Some(l) => l.clone(),
            None => self.expression.to_string(),
        }
    }

    pub fn est_verrouille(&self) -> bool {
        self.verrouille
    }

    pub fn est_en_erreur(&self) -> bool {
        self.erreur.is_some()
    }

    pub fn erreur(&self) -> Option<Sentinelle> {
        self.erreur
    }

    pub fn historique(&self) -> &[EntreeHistorique] {
        self.historique.entrees()
    }

    pub fn emplacements_memoire(&self) -> &[f64] {
        self.memoire.emplacements()
    }

    /// Indicateur « M » de l’écran.
    pub fn memoire_active(&self) -> bool {
        !self.memoire.est_vide()
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre `0`..`9` ou `.`.
    pub fn chiffre(&mut self, c: char) {
        if self.erreur.is_some() {
            return;
        }
        if !(c.is_ascii_digit() || c == '.') {
            tracing::debug!(touche = %c, "touche non numérique ignorée");
            return;
        }

        if self.verrouille {
            self.tampon = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.effacer_ligne();
            self.verrouille = false;
            return;
        }

        if self.tampon.chars().count() >= self.plafond {
            self.passer_en_erreur(Sentinelle::Depassement);
            return;
        }

        if c == '.' {
            if !self.tampon.contains('.') {
                self.tampon.push('.');
            }
            return;
        }

        match self.tampon.as_str() {
            "0" => self.tampon = c.to_string(),
            "-0" => self.tampon = format!("-{c}"),
            _ => self.tampon.push(c),
        }
    }

    /// C : tout remettre à zéro (mémoire et historique exceptés).
    pub fn tout_effacer(&mut self) {
        self.tampon = "0".to_string();
        self.effacer_ligne();
        self.erreur = None;
        self.verrouille = false;
        self.dernier_operateur = None;
        self.dernier_operande = None;
    }

    /// CE : seulement le tampon ; en erreur, équivaut à C.
    pub fn effacer_entree(&mut self) {
        if self.erreur.is_some() {
            return self.tout_effacer();
        }
        self.tampon = "0".to_string();
    }

    /// ⌫ : en erreur, équivaut à C.
    pub fn retour_arriere(&mut self) {
        if self.erreur.is_some() {
            return self.tout_effacer();
        }
        self.verrouille = false;

        let n = self.tampon.chars().count();
        if n <= 1 || (n == 2 && self.tampon.starts_with('-')) {
            self.tampon = "0".to_string();
        } else {
            self.tampon.pop();
        }
    }

    /// ± : "-0" est accepté.
    pub fn basculer_signe(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        match self.tampon.strip_prefix('-') {
            Some(reste) => self.tampon = reste.to_string(),
            None => self.tampon.insert(0, '-'),
        }
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn operateur(&mut self, op: Operateur) {
        if self.erreur.is_some() {
            return;
        }

        if self.verrouille {
            self.expression = Expression::seule(&self.tampon);
            self.verrouille = false;
        } else {
            self.expression.push_operande(&self.tampon);
        }
        self.expression.push_operateur(op);
        self.libelle = None;

        self.tampon = "0".to_string();
        self.dernier_operateur = Some(op);
    }

    /// = : trois cas
    /// - saisie normale : expression + tampon
    /// - résultat verrouillé avec opérateur/opérande connus : répète `tampon op opérande`
    /// - résultat verrouillé sans rien à répéter : réévalue le tampon seul
    pub fn egal(&mut self) {
        if self.erreur.is_some() {
            return;
        }

        let repetition = match (&self.dernier_operateur, &self.dernier_operande) {
            (Some(op), Some(operande)) if self.verrouille => {
                Some(Expression::binaire(&self.tampon, *op, operande))
            }
            _ => None,
        };
        let repete = repetition.is_some();

        let a_evaluer = match repetition {
            Some(e) => e,
            None if self.verrouille => Expression::seule(&self.tampon),
            None => {
                let mut e = self.expression.clone();
                e.push_operande(&self.tampon);
                e
            }
        };

        self.expression = a_evaluer.clone();
        self.libelle = None;

        match evaluer(&a_evaluer) {
            Ok(v) => {
                let precedent = std::mem::replace(&mut self.tampon, v.to_string());
                self.verrouille = true;
                // Répétition arithmétique : l’opérande répété ne change pas (5 → 8 → 11).
                if !repete {
                    self.dernier_operande = Some(precedent);
                }
                self.historique.ajouter(a_evaluer.to_string(), v);
                tracing::trace!(expression = %a_evaluer, resultat = v, "égal");
            }
            Err(s) => self.passer_en_erreur(s),
        }
    }

    /// √, x², 1/x sur le tampon.
    pub fn unaire(&mut self, op: OperateurUnaire) {
        if self.erreur.is_some() {
            return;
        }

        match apply_unary(op, self.valeur()) {
            Ok(v) => {
                let libelle = op.libelle(&self.tampon);
                self.expression.clear();
                self.tampon = v.to_string();
                self.verrouille = true;
                self.historique.ajouter(libelle.as_str(), v);
                self.libelle = Some(libelle);
            }
            Err(s) => self.passer_en_erreur(s),
        }
    }

    /// % : tampon / 100, sans verrou ni historique.
    pub fn pourcentage(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        self.tampon = apply_percent(self.valeur()).to_string();
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MS : la saisie suivante prolonge la valeur affichée (verrou levé).
    pub fn memoire_stocker(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        let v = self.valeur();
        self.memoire.stocker(v);
        self.verrouille = false;
    }

    /// MR : sans effet si le registre est vide.
    pub fn memoire_rappeler(&mut self) {
        if let Some(v) = self.memoire.tete() {
            self.rappeler(v);
        }
    }

    pub fn memoire_ajouter(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        if self.memoire.est_vide() {
            return self.memoire_stocker();
        }
        let v = self.valeur();
        self.memoire.ajouter(v);
    }

    pub fn memoire_soustraire(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        if self.memoire.est_vide() {
            return self.memoire_stocker();
        }
        let v = self.valeur();
        self.memoire.soustraire(v);
    }

    pub fn memoire_effacer(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        self.memoire.effacer();
    }

    /// Clic sur une case du panneau mémoire.
    pub fn rappeler_memoire(&mut self, index: usize) {
        if let Some(&v) = self.memoire.emplacements().get(index) {
            self.rappeler(v);
        }
    }

    /// Clic sur une ligne du panneau historique.
    pub fn rappeler_historique(&mut self, index: usize) {
        if let Some(v) = self.historique.get(index).map(|e| e.resultat) {
            self.rappeler(v);
        }
    }

    /* ------------------------ Interne ------------------------ */

    fn rappeler(&mut self, v: f64) {
        if self.erreur.is_some() {
            return;
        }
        self.tampon = v.to_string();
        self.verrouille = false;
    }

    /// Valeur numérique du tampon ("12." => 12).
    fn valeur(&self) -> f64 {
        self.tampon.parse().unwrap_or(0.0)
    }

    fn effacer_ligne(&mut self) {
        self.expression.clear();
        self.libelle = None;
    }

    fn passer_en_erreur(&mut self, s: Sentinelle) {
        tracing::debug!(sentinelle = %s, tampon = %self.tampon, "passage en erreur");
        self.erreur = Some(s);
        self.tampon = s.texte().to_string();
        self.verrouille = false;
    }
}

