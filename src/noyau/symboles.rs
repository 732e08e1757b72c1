// src/noyau/symboles.rs
//
// Vocabulaire fermé du pavé : chiffres, opérateurs binaires, fonctions
// unaires, parenthèses, contrôles.
//
// - Les textes canoniques (ceux affichés sur les touches) vivent ici.
// - `Touche` = ce qu’on presse ; `Tok` (jetons.rs) = ce qui reste dans la saisie.

use std::fmt;
use std::str::FromStr;

use super::erreur::ToucheInconnue;

pub const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
pub const OPERATEURS: [&str; 5] = ["+", "-", "×", "/", "^"];
pub const FONCTIONS: [&str; 9] = [
    "√", "sin", "cos", "tan", "ln", "arcsin", "arccos", "arctan", "x!",
];
pub const PARENTHESES: [&str; 2] = ["(", ")"];
pub const CONTROLES: [&str; 4] = ["C", "BS", ".", "="];

/// Nombre flottant, avec au plus UN `-` en tête.
///
/// Accepte "-3.5", "0.", "7", et les formes produites par l’évaluation
/// ("1e300", "inf", "NaN"). Refuse "", "-", "--5", "+5", ".".
pub fn est_numerique(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);
    if corps.is_empty() || corps.starts_with(['-', '+']) {
        return false;
    }
    corps.parse::<f64>().is_ok()
}

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
    Puissance,
}

impl Op {
    pub const TOUS: [Op; 5] = [Op::Plus, Op::Moins, Op::Fois, Op::Div, Op::Puissance];

    /// Même ordre que `OPERATEURS`.
    pub fn symbole(self) -> &'static str {
        OPERATEURS[self as usize]
    }

    pub fn depuis_symbole(s: &str) -> Option<Op> {
        OPERATEURS
            .iter()
            .position(|o| *o == s)
            .map(|i| Op::TOUS[i])
    }

    /// +,- → 1 ; ×,/ → 2 ; ^ → 3
    pub fn precedence(self) -> i32 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Div => 2,
            Op::Puissance => 3,
        }
    }

    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Div => a / b,
            Op::Puissance => a.powf(b),
        }
    }
}

/// Fonctions unaires (trig en radians).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Sin,
    Cos,
    Tan,
    Ln,
    ArcSin,
    ArcCos,
    ArcTan,
    Factorielle,
}

impl Fonction {
    pub const TOUTES: [Fonction; 9] = [
        Fonction::Racine,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Ln,
        Fonction::ArcSin,
        Fonction::ArcCos,
        Fonction::ArcTan,
        Fonction::Factorielle,
    ];

    /// Même ordre que `FONCTIONS`.
    pub fn symbole(self) -> &'static str {
        FONCTIONS[self as usize]
    }

    pub fn depuis_symbole(s: &str) -> Option<Fonction> {
        FONCTIONS
            .iter()
            .position(|f| *f == s)
            .map(|i| Fonction::TOUTES[i])
    }
}

/// Une touche pressée (un symbole par appel à `edit`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Point,
    Op(Op),
    Fonction(Fonction),
    LPar,
    RPar,
    /// C
    Effacer,
    /// BS
    Retour,
    /// =
    Egal,
    /// 1/x
    Inverse,
}

impl FromStr for Touche {
    type Err = ToucheInconnue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(op) = Op::depuis_symbole(s) {
            return Ok(Touche::Op(op));
        }
        if let Some(f) = Fonction::depuis_symbole(s) {
            return Ok(Touche::Fonction(f));
        }
        if let Some(d) = CHIFFRES.iter().position(|c| *c == s) {
            // position < 10
            return Ok(Touche::Chiffre(d as u8));
        }

        match s {
            "." => Ok(Touche::Point),
            "(" => Ok(Touche::LPar),
            ")" => Ok(Touche::RPar),
            "C" => Ok(Touche::Effacer),
            "BS" => Ok(Touche::Retour),
            "=" => Ok(Touche::Egal),
            "1/x" => Ok(Touche::Inverse),
            _ => Err(ToucheInconnue(s.to_string())),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(d) => write!(f, "{d}"),
            Touche::Point => f.write_str("."),
            Touche::Op(op) => f.write_str(op.symbole()),
            Touche::Fonction(fun) => f.write_str(fun.symbole()),
            Touche::LPar => f.write_str("("),
            Touche::RPar => f.write_str(")"),
            Touche::Effacer => f.write_str("C"),
            Touche::Retour => f.write_str("BS"),
            Touche::Egal => f.write_str("="),
            Touche::Inverse => f.write_str("1/x"),
        }
    }
}
