//! Éditeur de saisie : (jetons, touche) -> nouveaux jetons.
//!
//! Contrats :
//! - Fonction pure : l’entrée n’est jamais modifiée, on rend une nouvelle liste.
//! - Totale : aucune touche ne fait échouer l’édition (un `=` raté rend la saisie intacte).
//! - La saisie reste toujours ré-éditable : `#( >= #)`, jamais de ')' après un opérateur ou '('.

use super::eval::evaluer;
use super::jetons::Tok;
use super::symboles::{est_numerique, Op, Touche};

/// Applique UNE touche à la saisie.
pub fn edit(tokens: &[Tok], touche: Touche) -> Vec<Tok> {
    let mut out = tokens.to_vec();

    match touche {
        Touche::Effacer => return Vec::new(),

        Touche::Retour => retour(&mut out),

        // 1/x : "1" puis "/" (pas de × implicite)
        Touche::Inverse => {
            out.push(Tok::Num("1".into()));
            out.push(Tok::Op(Op::Div));
        }

        Touche::Egal => {
            if tokens.is_empty() {
                return Vec::new();
            }
            return match evaluer(tokens) {
                Ok(resultat) => resultat,
                Err(e) => {
                    tracing::debug!(erreur = %e, "évaluation refusée, saisie conservée");
                    out
                }
            };
        }

        Touche::Chiffre(d) => chiffre(&mut out, d),
        Touche::Point => point(&mut out),
        Touche::Op(op) => operateur(&mut out, op),

        Touche::Fonction(f) => {
            mul_implicite(&mut out);
            out.push(Tok::Fonction(f));
            out.push(Tok::LPar);
        }

        Touche::LPar => {
            mul_implicite(&mut out);
            out.push(Tok::LPar);
        }

        Touche::RPar => {
            let ouvertes = out.iter().filter(|t| matches!(t, Tok::LPar)).count();
            let fermees = out.iter().filter(|t| matches!(t, Tok::RPar)).count();
            let dernier_ok = matches!(out.last(), Some(t) if !t.est_op() && *t != Tok::LPar);

            if ouvertes > fermees && dernier_ok {
                out.push(Tok::RPar);
            }
        }
    }

    out
}

/// BS : un caractère pour un nombre de plus d’un caractère, sinon le jeton entier.
fn retour(out: &mut Vec<Tok>) {
    match out.pop() {
        Some(Tok::Num(mut s)) if s.chars().count() > 1 => {
            s.pop();
            // "-5" -> "-" : redevient le germe de moins
            out.push(Tok::lire(&s));
        }
        _ => {}
    }
}

fn chiffre(out: &mut Vec<Tok>, d: u8) {
    let n = out.len();

    // germe "-" en début, après un opérateur ou après '(' : "-" + d
    let avant_dernier = n.checked_sub(2).map(|i| &out[i]);
    let germe = matches!(out.last(), Some(Tok::Op(Op::Moins)))
        && matches!(avant_dernier, None | Some(Tok::Op(_)) | Some(Tok::LPar));
    if germe {
        out[n - 1] = Tok::Num(format!("-{d}"));
        return;
    }

    match out.last() {
        Some(Tok::Num(s)) => {
            let texte = format!("{s}{d}");
            out[n - 1] = Tok::lire(&texte);
        }
        Some(Tok::RPar) => {
            out.push(Tok::Op(Op::Fois));
            out.push(Tok::Num(d.to_string()));
        }
        _ => out.push(Tok::Num(d.to_string())),
    }
}

fn point(out: &mut Vec<Tok>) {
    match out.last() {
        // "1e20." / "inf." / "NaN." ne sont pas des nombres : on n’y touche pas
        Some(Tok::Num(s)) => {
            let texte = format!("{s}.");
            if !s.contains('.') && est_numerique(&texte) {
                let n = out.len();
                out[n - 1] = Tok::Num(texte);
            }
        }
        None | Some(Tok::Op(_)) | Some(Tok::LPar) => out.push(Tok::Num("0.".into())),
        _ => {}
    }
}

fn operateur(out: &mut Vec<Tok>, op: Op) {
    match out.last() {
        // moins unaire : germe qui attend un chiffre
        None | Some(Tok::Op(_)) | Some(Tok::LPar) if op == Op::Moins => out.push(Tok::Op(op)),
        Some(Tok::Num(_)) | Some(Tok::RPar) => out.push(Tok::Op(op)),
        // dernier opérateur pressé gagne
        Some(Tok::Op(_)) => {
            let n = out.len();
            out[n - 1] = Tok::Op(op);
        }
        _ => {}
    }
}

/// × implicite devant '(' ou une fonction : "2 (" -> "2 × (", ") sin" -> ") × sin".
fn mul_implicite(out: &mut Vec<Tok>) {
    if matches!(out.last(), Some(t) if t.est_num() || *t == Tok::RPar) {
        out.push(Tok::Op(Op::Fois));
    }
}
