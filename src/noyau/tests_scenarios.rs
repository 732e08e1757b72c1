//! Scénarios concrets : suites de touches telles que pressées sur le pavé.
//!
//! Chaque scénario part d’une saisie vide et vérifie la liste de jetons
//! (et l’affichage) après chaque étape utile.

use super::{edit, format_tokens, Fonction, Op, Tok, Touche};

fn tape(touches: &[Touche]) -> Vec<Tok> {
    touches.iter().fold(Vec::new(), |acc, t| edit(&acc, *t))
}

fn num(s: &str) -> Tok {
    Tok::Num(s.to_string())
}

#[test]
fn scenario_addition() {
    let t = tape(&[Touche::Chiffre(7), Touche::Op(Op::Plus), Touche::Chiffre(8)]);
    assert_eq!(t, vec![num("7"), Tok::Op(Op::Plus), num("8")]);
    assert_eq!(format_tokens(&t), "7 + 8");

    let r = edit(&t, Touche::Egal);
    assert_eq!(r, vec![num("15.0")]);
    assert_eq!(format_tokens(&r), "15.0");
}

#[test]
fn scenario_puissance_associative_a_droite() {
    let r = tape(&[
        Touche::Chiffre(2),
        Touche::Op(Op::Puissance),
        Touche::Chiffre(3),
        Touche::Op(Op::Puissance),
        Touche::Chiffre(2),
        Touche::Egal,
    ]);
    // 2^(3^2) = 512, pas (2^3)^2 = 64
    assert_eq!(r, vec![num("512.0")]);
}

#[test]
fn scenario_parenthese_non_fermee() {
    let t = tape(&[
        Touche::LPar,
        Touche::Chiffre(3),
        Touche::Op(Op::Plus),
        Touche::Chiffre(4),
    ]);
    assert_eq!(format_tokens(&t), "( 3 + 4");
    assert_eq!(edit(&t, Touche::Egal), vec![num("7.0")]);
}

#[test]
fn scenario_factorielle_non_entiere() {
    let t = tape(&[
        Touche::Fonction(Fonction::Factorielle),
        Touche::Chiffre(4),
        Touche::Point,
        Touche::Chiffre(5),
        Touche::RPar,
    ]);
    assert_eq!(format_tokens(&t), "x! ( 4.5 )");
    assert_eq!(edit(&t, Touche::Egal), t);

    // et sur un entier, ça passe
    let t = tape(&[
        Touche::Fonction(Fonction::Factorielle),
        Touche::Chiffre(5),
        Touche::Egal,
    ]);
    assert_eq!(t, vec![num("120.0")]);
}

#[test]
fn scenario_retour_sur_un_chiffre() {
    let t = tape(&[Touche::Chiffre(3)]);
    assert_eq!(t, vec![num("3")]);
    assert_eq!(edit(&t, Touche::Retour), vec![]);
}

#[test]
fn scenario_parenthese_fermante_orpheline() {
    let t = tape(&[Touche::Chiffre(4), Touche::RPar]);
    assert_eq!(t, vec![num("4")]);
    assert_eq!(edit(&t, Touche::Egal), vec![num("4.0")]);
}

#[test]
fn scenario_scientifique_compose() {
    // 2 √ 9 ) + sin 0 ) =  ->  2 × √(9) + sin(0) = 6
    let t = tape(&[
        Touche::Chiffre(2),
        Touche::Fonction(Fonction::Racine),
        Touche::Chiffre(9),
        Touche::RPar,
        Touche::Op(Op::Plus),
        Touche::Fonction(Fonction::Sin),
        Touche::Chiffre(0),
        Touche::RPar,
    ]);
    assert_eq!(format_tokens(&t), "2 × √ ( 9 ) + sin ( 0 )");
    assert_eq!(edit(&t, Touche::Egal), vec![num("6.0")]);
}

#[test]
fn scenario_negatif_dans_parentheses() {
    // ( - 3 ) ( 2 ) =  ->  (-3) × (2) = -6
    let t = tape(&[
        Touche::LPar,
        Touche::Op(Op::Moins),
        Touche::Chiffre(3),
        Touche::RPar,
        Touche::LPar,
        Touche::Chiffre(2),
        Touche::RPar,
    ]);
    assert_eq!(format_tokens(&t), "( -3 ) × ( 2 )");
    assert_eq!(edit(&t, Touche::Egal), vec![num("-6.0")]);
}

#[test]
fn scenario_division_par_zero_affichee() {
    let r = tape(&[
        Touche::Chiffre(1),
        Touche::Op(Op::Div),
        Touche::Chiffre(0),
        Touche::Egal,
    ]);
    assert_eq!(format_tokens(&r), "inf");
}
