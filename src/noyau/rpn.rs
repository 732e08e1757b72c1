// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir la saisie (Tok infixes) en RPN (postfix)
// - Puis réduire la RPN avec une pile de f64
//
// Règles:
// - Fonction unaire : toujours suivie de sa '(' dans la saisie, donc
//   jamais dépilée par précédence ; elle sort après la ')' correspondante.
// - '^' associatif à droite, le reste à gauche.
// - '(' non fermée : fermée implicitement en fin de saisie ("( 3 + 4" = 7).
//
// NOTE:
// - Pas de moins unaire ici : l’éditeur plie le '-' dans le nombre ("-3").
//   Un '-' isolé reste un opérateur binaire (et manque d’opérandes).

use num_traits::ToPrimitive;

use super::erreur::ErreurEval;
use super::jetons::{is_right_associative, precedence, Tok};
use super::symboles::Fonction;

/// Convertit la saisie en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Num("2"), Op(Plus), Num("1"), RPar]
///   rpn:    [Num("2"), Num("1"), Op(Plus), Fonction(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            // fonction : sur la pile, elle sortira après son argument
            Tok::Fonction(_) => ops.push(tok),

            Tok::Op(_) => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (qui est jetée) ou pile vide
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }

                // fonction au sommet => liée à l’argument qu’on vient de fermer
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Tok::Inconnu(s) => return Err(ErreurEval::JetonInconnu(s)),
        }
    }

    // vide la pile ops ; les '(' restantes sont fermées implicitement
    while let Some(op) = ops.pop() {
        if !matches!(op, Tok::LPar) {
            out.push(op);
        }
    }

    tracing::trace!(rpn = %super::jetons::format_tokens(&out), "conversion RPN");
    Ok(out)
}

/// Réduit une RPN en une liste résultat : UN jeton (`Num`), ou rien si la RPN
/// ne laisse aucune valeur (`( =` vide la saisie).
///
/// Le nombre est rendu au format `{:?}` de f64 : "15.0", "0.5", "1e300", "inf", "NaN".
pub fn eval_rpn(rpn: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    match reduit_pile(rpn)?.as_slice() {
        [] => Ok(Vec::new()),
        [v] => Ok(vec![Tok::Num(format!("{v:?}"))]),
        reste => Err(ErreurEval::ValeursRestantes(reste.len())),
    }
}

/// Pile de valeurs : nombres empilés, opérateurs/fonctions appliqués.
fn reduit_pile(rpn: &[Tok]) -> Result<Vec<f64>, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(s) => {
                let v = s
                    .parse::<f64>()
                    .map_err(|_| ErreurEval::JetonInconnu(s.clone()))?;
                st.push(v);
            }

            Tok::Fonction(f) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::PileInsuffisante(f.symbole().into()))?;
                st.push(applique_fonction(*f, x)?);
            }

            Tok::Op(op) => {
                // ordre : b (droite) sort en premier, puis a (gauche)
                let manque = || ErreurEval::PileInsuffisante(op.symbole().into());
                let b = st.pop().ok_or_else(manque)?;
                let a = st.pop().ok_or_else(manque)?;
                st.push(op.applique(a, b));
            }

            Tok::LPar | Tok::RPar | Tok::Inconnu(_) => {
                return Err(ErreurEval::JetonInconnu(tok.texte().into()))
            }
        }
    }

    Ok(st)
}

fn applique_fonction(f: Fonction, x: f64) -> Result<f64, ErreurEval> {
    let v = match f {
        Fonction::Racine => x.sqrt(),
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => x.tan(),
        Fonction::Ln => x.ln(),
        Fonction::ArcSin => x.asin(),
        Fonction::ArcCos => x.acos(),
        Fonction::ArcTan => x.atan(),
        Fonction::Factorielle => factorielle(x)?,
    };
    Ok(v)
}

/// n! par produit itératif, n entier >= 0 seulement (pas de Gamma).
///
/// Au-delà de 170! le produit vaut `inf` : on s’arrête dès qu’il y est.
pub fn factorielle(x: f64) -> Result<f64, ErreurEval> {
    // NaN et ±inf ont fract() = NaN => refusés ici
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurEval::FactorielleInvalide(x));
    }

    // entier trop grand pour u64 : le produit déborde de toute façon
    let n = x.to_u64().unwrap_or(u64::MAX);

    let mut acc = 1.0_f64;
    for k in 1..=n {
        acc *= k as f64;
        if acc.is_infinite() {
            break;
        }
    }
    Ok(acc)
}
