//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la saisie courante (liste de jetons) et le mode du pavé.
//!
//! Contrats :
//! - Chaque touche remplace la saisie par une NOUVELLE liste (jamais modifiée en place).
//! - Le mode est purement visuel : le changer ne touche pas à la saisie.

use crate::noyau::{edit, format_tokens, Tok, Touche};

/// Pavé affiché.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Basique,
    Scientifique,
}

impl Mode {
    /// Libellé de la touche de bascule.
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Basique => "BASIC",
            Mode::Scientifique => "SCI.",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- saisie ---
    pub jetons: Vec<Tok>,

    // --- pavé ---
    pub mode: Mode,
}

impl AppCalc {
    pub fn new(mode: Mode) -> Self {
        Self {
            jetons: Vec::new(),
            mode,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Une touche = un appel à l’éditeur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.jetons = edit(&self.jetons, touche);
        tracing::trace!(%touche, saisie = %self.affichage(), "touche");
    }

    /// C : effacer la saisie.
    pub fn clear_entree(&mut self) {
        self.appuyer(Touche::Effacer);
    }

    /// BASIC <-> SCI. (la saisie est conservée)
    pub fn basculer_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Basique => Mode::Scientifique,
            Mode::Scientifique => Mode::Basique,
        };
        tracing::debug!(mode = ?self.mode, "bascule du pavé");
    }

    /// Texte de l’écran : "0" si vide.
    pub fn affichage(&self) -> String {
        format_tokens(&self.jetons)
    }
}
