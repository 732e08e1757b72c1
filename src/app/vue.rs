// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : saisie jointe par des espaces, défilée vers la droite
// - Pavé BASIC ou SCI. (le pavé SCI. remplace le pavé BASIC)
// - Clavier : Enter = "=", Backspace = BS, caractères du vocabulaire
//   (Escape = C est géré dans app.rs)

use eframe::egui;

use super::etat::{AppCalc, Mode};
use crate::noyau::symboles::{CHIFFRES, CONTROLES, OPERATEURS, PARENTHESES};
use crate::noyau::{Fonction, Op, Touche};

const TAILLE_TOUCHE: [f32; 2] = [72.0, 56.0];
const TAILLE_TEXTE_TOUCHE: f32 = 22.0;
const TAILLE_ECRAN: f32 = 40.0;

/// Une case du pavé.
#[derive(Clone, Copy, Debug)]
enum Case {
    Vide,
    Touche(Touche),
    Mode,
}

const fn t(touche: Touche) -> Case {
    Case::Touche(touche)
}

const fn c(d: u8) -> Case {
    Case::Touche(Touche::Chiffre(d))
}

const fn op(o: Op) -> Case {
    Case::Touche(Touche::Op(o))
}

const fn f(fonction: Fonction) -> Case {
    Case::Touche(Touche::Fonction(fonction))
}

const PAVE_BASIQUE: [[Case; 4]; 6] = [
    [Case::Vide, Case::Vide, Case::Vide, t(Touche::Retour)],
    [t(Touche::Effacer), t(Touche::LPar), t(Touche::RPar), op(Op::Div)],
    [c(7), c(8), c(9), op(Op::Fois)],
    [c(4), c(5), c(6), op(Op::Moins)],
    [c(1), c(2), c(3), op(Op::Plus)],
    [Case::Mode, c(0), t(Touche::Point), t(Touche::Egal)],
];

const PAVE_SCIENTIFIQUE: [[Case; 4]; 3] = [
    [
        f(Fonction::Racine),
        f(Fonction::Sin),
        f(Fonction::Cos),
        f(Fonction::Tan),
    ],
    [
        f(Fonction::Ln),
        f(Fonction::ArcSin),
        f(Fonction::ArcCos),
        f(Fonction::ArcTan),
    ],
    [
        Case::Mode,
        t(Touche::Inverse),
        f(Fonction::Factorielle),
        op(Op::Puissance),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.ui_clavier(ui);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let texte = egui::RichText::new(self.affichage())
            .monospace()
            .size(TAILLE_ECRAN);

        // Une seule ligne : on défile plutôt que de couper
        egui::ScrollArea::horizontal()
            .stick_to_right(true)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.add_space(24.0);
                ui.add(egui::Label::new(texte).wrap_mode(egui::TextWrapMode::Extend));
                ui.add_space(24.0);
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mode = self.mode;
        let pave: &[[Case; 4]] = match mode {
            Mode::Basique => &PAVE_BASIQUE,
            Mode::Scientifique => &PAVE_SCIENTIFIQUE,
        };

        let mut clic: Option<Case> = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in pave {
                    for case in rangee {
                        if Self::bouton(ui, *case, mode) {
                            clic = Some(*case);
                        }
                    }
                    ui.end_row();
                }
            });

        match clic {
            Some(Case::Touche(touche)) => self.appuyer(touche),
            Some(Case::Mode) => self.basculer_mode(),
            Some(Case::Vide) | None => {}
        }
    }

    /// Dessine une case ; true si elle vient d’être cliquée.
    fn bouton(ui: &mut egui::Ui, case: Case, mode: Mode) -> bool {
        let libelle = match case {
            Case::Vide => {
                ui.label("");
                return false;
            }
            Case::Mode => mode.libelle().to_string(),
            Case::Touche(Touche::Retour) => "DEL".to_string(),
            Case::Touche(touche) => touche.to_string(),
        };

        let texte = egui::RichText::new(libelle).size(TAILLE_TEXTE_TOUCHE);
        let bouton = match case {
            Case::Touche(Touche::Egal) => egui::Button::new(texte.strong()),
            _ => egui::Button::new(texte),
        };

        ui.add_sized(TAILLE_TOUCHE, bouton).clicked()
    }

    /// Clavier physique : une touche reconnue = un appui.
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let touches: Vec<Touche> = ui.input(|i| i.events.iter().filter_map(touche_clavier).collect());
        for touche in touches {
            self.appuyer(touche);
        }
    }
}

fn touche_clavier(ev: &egui::Event) -> Option<Touche> {
    match ev {
        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            ..
        } => Some(Touche::Egal),
        egui::Event::Key {
            key: egui::Key::Backspace,
            pressed: true,
            ..
        } => Some(Touche::Retour),
        egui::Event::Text(s) => {
            // '*' du clavier = '×' du pavé
            if s == "*" {
                return Some(Touche::Op(Op::Fois));
            }
            let s = s.as_str();
            // "C" au clavier n’efface pas : seul Escape le fait
            let connu = CHIFFRES.contains(&s)
                || OPERATEURS.contains(&s)
                || PARENTHESES.contains(&s)
                || (CONTROLES.contains(&s) && s != "C");
            if connu {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}
