// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier physique:
// - Texte (chiffres, . , + - * / = %) => Touche::depuis_caractere
// - Enter = "=", Backspace = ⌫, Escape = C, Delete = CE

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

/// Touches spéciales (pas d’événement texte associé).
fn touche_speciale(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::RetourArriere),
        egui::Key::Escape => Some(Touche::ToutEffacer),
        egui::Key::Delete => Some(Touche::EffacerEntree),
        _ => None,
    }
}

impl AppCalc {
    /// Événements clavier de la frame, dans l’ordre d’arrivée.
    fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
        ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|ev| -> Vec<Touche> {
                    match ev {
                        egui::Event::Text(t) => {
                            t.chars().filter_map(Touche::depuis_caractere).collect()
                        }
                        egui::Event::Key {
                            key, pressed: true, ..
                        } => touche_speciale(*key).into_iter().collect(),
                        _ => Vec::new(),
                    }
                })
                .collect()
        })
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in Self::touches_clavier(ctx) {
            self.appuyer(touche);
        }

        if self.panneau_visible {
            egui::SidePanel::right("panneau_lateral")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| self.ui_panneau(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
