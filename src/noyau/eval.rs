//! Noyau — évaluation (pipeline de la touche `=`)
//!
//! saisie (Tok infixes) -> RPN -> pile de valeurs -> résultat (UN jeton, ou vide)
//!
//! Remarque : aucune erreur n’est affichée ; c’est `edit` qui décide
//! de garder la saisie si l’évaluation échoue.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, Tok};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue la saisie complète.
///
/// - Ok(liste d’un seul `Num`) : le résultat, prêt à être ré-édité
/// - Ok(liste vide) : aucune valeur (que des '(' orphelines)
/// - Err(..) : structure invalide (pile insuffisante, factorielle, jeton inconnu,
///   valeurs restantes)
pub fn evaluer(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let rpn = to_rpn(tokens)?;
    let resultat = eval_rpn(&rpn)?;

    tracing::debug!(
        saisie = %format_tokens(tokens),
        rpn = %format_tokens(&rpn),
        resultat = %format_tokens(&resultat),
        "évaluation"
    );

    Ok(resultat)
}
