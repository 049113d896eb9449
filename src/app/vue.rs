// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne d’expression + valeur formatée + indicateur M
// - Barre mémoire, pavé 4 colonnes, panneau Historique / Mémoire
//
// Note :
// - Tout texte numérique passe par format_number_for_display (écran, historique, mémoire)

use eframe::egui;

use calculatrice_pave::noyau::{format_number_for_display, Operateur, OperateurUnaire};

use super::etat::{AppCalc, Panneau, Touche};

/// Pavé, ligne par ligne (disposition classique 4 colonnes).
const PAVE: [[Touche; 4]; 6] = [
    [
        Touche::Pourcentage,
        Touche::EffacerEntree,
        Touche::ToutEffacer,
        Touche::RetourArriere,
    ],
    [
        Touche::Unaire(OperateurUnaire::Inverse),
        Touche::Unaire(OperateurUnaire::Carre),
        Touche::Unaire(OperateurUnaire::Racine),
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre('7'),
        Touche::Chiffre('8'),
        Touche::Chiffre('9'),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre('4'),
        Touche::Chiffre('5'),
        Touche::Chiffre('6'),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre('1'),
        Touche::Chiffre('2'),
        Touche::Chiffre('3'),
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::Signe,
        Touche::Chiffre('0'),
        Touche::Chiffre('.'),
        Touche::Egal,
    ],
];

const BARRE_MEMOIRE: [Touche; 5] = [
    Touche::MemoireEffacer,
    Touche::MemoireRappeler,
    Touche::MemoireAjouter,
    Touche::MemoireSoustraire,
    Touche::MemoireStocker,
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("☰")
                    .on_hover_text("Historique / Mémoire")
                    .clicked()
                {
                    self.basculer_panneau();
                }
            });
        });
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_barre_memoire(ui);

        ui.add_space(6.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let s = &self.session;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d’expression (toujours présente, même vide : hauteur stable)
                    ui.label(egui::RichText::new(s.texte_expression() + " ").weak());

                    let texte = egui::RichText::new(s.texte_affiche()).monospace().size(34.0);
                    if s.est_en_erreur() {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte.strong());
                    }
                });

                if s.memoire_active() {
                    ui.small("M");
                }
            });
    }

    fn ui_barre_memoire(&mut self, ui: &mut egui::Ui) {
        let memoire_vide = !self.session.memoire_active();

        ui.horizontal(|ui| {
            for touche in BARRE_MEMOIRE {
                let inactif = memoire_vide
                    && matches!(touche, Touche::MemoireEffacer | Touche::MemoireRappeler);
                let resp = ui.add_enabled(
                    !inactif,
                    egui::Button::new(touche.libelle()).min_size(egui::vec2(52.0, 24.0)),
                );
                if resp.clicked() {
                    self.appuyer(touche);
                }
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ((ui.available_width() - 3.0 * 6.0) / 4.0).max(48.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche, largeur);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let texte = egui::RichText::new(touche.libelle()).size(18.0);
        let bouton = match touche {
            Touche::Egal => egui::Button::new(texte.strong()).fill(ui.visuals().selection.bg_fill),
            Touche::Chiffre(_) => egui::Button::new(texte.strong()),
            _ => egui::Button::new(texte),
        };

        if ui.add_sized([largeur, 44.0], bouton).clicked() {
            self.appuyer(touche);
        }
    }

    /// Panneau latéral : onglets Historique / Mémoire, clic = rappel de la valeur.
    pub fn ui_panneau(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.panneau, Panneau::Historique, "Historique");
            ui.selectable_value(&mut self.panneau, Panneau::Memoire, "Mémoire");
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.panneau {
                Panneau::Historique => self.ui_historique(ui),
                Panneau::Memoire => self.ui_memoire(ui),
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        if self.session.historique().is_empty() {
            ui.weak("Pas encore d’historique");
            return;
        }

        let mut rappel = None;
        for (i, entree) in self.session.historique().iter().enumerate() {
            let texte = format!(
                "{} =\n{}",
                entree.expression,
                format_number_for_display(entree.resultat)
            );
            if ui
                .add(egui::Button::new(egui::RichText::new(texte).monospace()).frame(false))
                .clicked()
            {
                rappel = Some(i);
            }
            ui.separator();
        }

        if let Some(i) = rappel {
            self.session.rappeler_historique(i);
        }
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        if self.session.emplacements_memoire().is_empty() {
            ui.weak("Aucune valeur en mémoire");
            return;
        }

        let mut rappel = None;
        for (i, &v) in self.session.emplacements_memoire().iter().enumerate() {
            let texte = egui::RichText::new(format_number_for_display(v)).monospace();
            if ui.add(egui::Button::new(texte).frame(false)).clicked() {
                rappel = Some(i);
            }
        }

        if let Some(i) = rappel {
            self.session.rappeler_memoire(i);
        }
    }
}
