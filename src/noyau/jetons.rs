// src/noyau/jetons.rs

use std::fmt;

use super::symboles::{est_numerique, Fonction, Op};

/// Un jeton de la saisie (infixe), tel qu’affiché.
///
/// Un jeton se construit TOUJOURS depuis son texte (`Tok::lire`) :
/// un nombre raccourci par BS est reclassé ("-5" -> "-" redevient `Op(Moins)`).
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Texte numérique ("7", "-3", "0.", "15.0"…), jamais un "-" seul.
    Num(String),
    Op(Op),
    Fonction(Fonction),

    LPar,
    RPar,

    // Texte hors vocabulaire (ex: "inf" + chiffre). L’évaluation le refuse.
    Inconnu(String),
}

impl Tok {
    /// Classe un texte dans le vocabulaire.
    pub fn lire(s: &str) -> Tok {
        if est_numerique(s) {
            return Tok::Num(s.to_string());
        }
        if let Some(op) = Op::depuis_symbole(s) {
            return Tok::Op(op);
        }
        if let Some(f) = Fonction::depuis_symbole(s) {
            return Tok::Fonction(f);
        }
        match s {
            "(" => Tok::LPar,
            ")" => Tok::RPar,
            _ => Tok::Inconnu(s.to_string()),
        }
    }

    pub fn est_num(&self) -> bool {
        matches!(self, Tok::Num(_))
    }

    pub fn est_op(&self) -> bool {
        matches!(self, Tok::Op(_))
    }

    pub fn texte(&self) -> &str {
        match self {
            Tok::Num(s) | Tok::Inconnu(s) => s,
            Tok::Op(op) => op.symbole(),
            Tok::Fonction(f) => f.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

/// Précédence d’un jeton : celle de l’opérateur, 0 pour tout le reste.
pub fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Op(op) => op.precedence(),
        _ => 0,
    }
}

pub fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Op(Op::Puissance))
}

/// Affichage de la saisie : "0" si vide, sinon jetons séparés par un espace.
pub fn format_tokens(tokens: &[Tok]) -> String {
    if tokens.is_empty() {
        return "0".to_string();
    }

    tokens
        .iter()
        .map(Tok::texte)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Utilitaire de test : "7 + 8" -> jetons.
#[cfg(test)]
pub fn lire_jetons(s: &str) -> Vec<Tok> {
    s.split_whitespace().map(Tok::lire).collect()
}
