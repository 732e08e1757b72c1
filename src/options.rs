//! Options de ligne de commande (natif seulement).

use clap::{Parser, ValueEnum};

use crate::app::Mode;

/// Calculatrice à pavé (basique + scientifique).
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {
    /// Pavé affiché au démarrage.
    #[arg(long, value_enum, default_value_t = ModeDepart::Basique)]
    pub mode: ModeDepart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeDepart {
    Basique,
    Scientifique,
}

impl From<ModeDepart> for Mode {
    fn from(m: ModeDepart) -> Self {
        match m {
            ModeDepart::Basique => Mode::Basique,
            ModeDepart::Scientifique => Mode::Scientifique,
        }
    }
}
