// src/saisie/historique.rs

/// Une ligne d’historique : texte de l’expression évaluée + valeur obtenue.
#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: f64,
}

/// Journal des calculs de la session : ajout seulement, plus récent en tête, non borné.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: f64) {
        self.entrees.insert(
            0,
            EntreeHistorique {
                expression: expression.into(),
                resultat,
            },
        );
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }
}
