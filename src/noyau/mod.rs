//! Noyau du pavé (f64)
//!
//! Organisation interne :
//! - symboles.rs : vocabulaire fermé (touches, opérateurs, fonctions) + est_numerique
//! - jetons.rs   : jetons de la saisie + précédence + affichage
//! - editeur.rs  : (saisie, touche) -> saisie
//! - rpn.rs      : shunting-yard + réduction par pile
//! - eval.rs     : pipeline de la touche `=`
//! - erreur.rs   : erreurs typées

pub mod editeur;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod symboles;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use editeur::edit;
pub use jetons::{format_tokens, Tok};
pub use symboles::{Fonction, Op, Touche};
