//! Erreurs du noyau.
//!
//! L’éditeur ne lève jamais rien : seules l’évaluation (`=`) et la lecture
//! d’une touche depuis son texte peuvent échouer.

use thiserror::Error;

/// Échec d’évaluation. Absorbé par `=` (la saisie reste intacte).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEval {
    /// Opérateur ou fonction sans assez de valeurs sur la pile.
    #[error("opérandes manquants pour « {0} »")]
    PileInsuffisante(String),

    /// Factorielle d’un négatif ou d’un non-entier.
    #[error("factorielle invalide pour {0}")]
    FactorielleInvalide(f64),

    /// Jeton hors vocabulaire (ou parenthèse en RPN).
    #[error("jeton inconnu : « {0} »")]
    JetonInconnu(String),

    /// La RPN laisse plusieurs valeurs sur la pile.
    #[error("expression incomplète : {0} valeur(s) restante(s)")]
    ValeursRestantes(usize),
}

/// Texte qui ne nomme aucune touche du pavé.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("touche inconnue : « {0} »")]
pub struct ToucheInconnue(pub String);
