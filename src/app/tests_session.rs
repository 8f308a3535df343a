//! Tests de session : scénarios de touches + invariants sous séquences aléatoires.

use proptest::prelude::*;

use crate::noyau::{Fonction, ModeAngle, Operateur};

use super::touches::{Controle, Touche};
use super::{Reglages, Session};

fn session(touches: &str) -> Session {
    let mut s = Session::default();
    assert_eq!(s.saisir(touches), 0, "saisie {touches:?}");
    s.verifier_invariants().unwrap();
    s
}

fn assert_proche(txt: &str, attendu: f64) {
    let v: f64 = txt
        .parse()
        .unwrap_or_else(|_| panic!("affichage non numérique: {txt:?}"));
    assert!((v - attendu).abs() < 1e-9, "obtenu={v} attendu={attendu}");
}

/* ------------------------ Scénarios de base ------------------------ */

#[test]
fn addition_simple() {
    let s = session("2+3=");
    assert_eq!(s.affichage, "5");
    assert_eq!(s.expression, "5");
    assert!(s.vient_d_evaluer);
    assert_eq!(s.historique.iter().collect::<Vec<_>>(), vec!["2+3 = 5"]);
}

#[test]
fn precedence_des_operateurs() {
    let s = session("3+4*2=");
    assert_eq!(s.affichage, "11");
}

#[test]
fn division_par_zero_en_erreur() {
    let s = session("5/0=");
    assert!(s.en_erreur);
    assert_eq!(s.affichage, "Error");
    assert_eq!(s.expression, "");
    assert_eq!(s.message_erreur, "division par zéro");
    assert_eq!(s.historique.derniere(), Some("Error: division par zéro"));
}

#[test]
fn sinus_parenthese_completee() {
    let s = session("sin(90=");
    assert_proche(&s.affichage, 1.0);
    assert_eq!(s.historique.derniere(), Some("sin(90 = 1"));
}

#[test]
fn sinus_en_radians() {
    let mut s = Session::default();
    s.appuyer(Touche::Controle(Controle::ModeAngle));
    assert_eq!(s.mode_angle, ModeAngle::Radians);
    s.saisir("cos(0=");
    assert_eq!(s.affichage, "1");
    s.saisir("acos(0=");
    assert_eq!(s.affichage, "1.5707963268");
}

#[test]
fn reglage_radians_au_demarrage() {
    let reglages = Reglages {
        mode_angle: ModeAngle::Radians,
        ..Reglages::default()
    };
    let mut s = Session::avec_reglages(reglages);
    s.saisir("tan(90=");
    assert!(!s.en_erreur, "pas d’asymptote à 90 rad");
}

#[test]
fn tangente_indefinie() {
    let s = session("tan(90)=");
    assert!(s.en_erreur);
    assert_eq!(s.message_erreur, "tangente indéfinie à 90 degrés");
}

/* ------------------------ Chiffres / point ------------------------ */

#[test]
fn zero_initial_remplace() {
    let s = session("007");
    assert_eq!(s.affichage, "7");
    assert_eq!(s.expression, "007");
}

#[test]
fn point_unique_par_operande() {
    let s = session("1.2.3");
    assert_eq!(s.affichage, "1.23");
    assert_eq!(s.expression, "1.23");

    let s = session("1.5+.5=");
    assert_eq!(s.affichage, "2");
}

#[test]
fn point_apres_resultat_prolonge_le_resultat() {
    let s = session("2+3=.");
    assert_eq!(s.affichage, "5.");
    assert_eq!(s.expression, "5.");
    assert!(!s.vient_d_evaluer);

    let s = session("2+3=.5=");
    assert_eq!(s.affichage, "5.5");
}

#[test]
fn point_apres_resultat_deja_decimal_sans_effet() {
    let s = session("5/2=.");
    assert_eq!(s.affichage, "2.5");
    assert_eq!(s.expression, "2.5");
    assert!(s.vient_d_evaluer);
}

#[test]
fn chiffre_apres_resultat_nouvelle_expression() {
    let s = session("2+3=7");
    assert_eq!(s.affichage, "7");
    assert_eq!(s.expression, "7");
    assert!(!s.vient_d_evaluer);
}

/* ------------------------ Opérateurs / chaînage ------------------------ */

#[test]
fn operateur_apres_resultat_enchaine() {
    let s = session("2+3=*4=");
    assert_eq!(s.affichage, "20");
    assert_eq!(
        s.historique.iter().collect::<Vec<_>>(),
        vec!["2+3 = 5", "5*4 = 20"]
    );
}

#[test]
fn operateur_remet_affichage_a_zero() {
    let s = session("12+");
    assert_eq!(s.affichage, "0");
    assert_eq!(s.expression, "12+");
}

#[test]
fn moins_en_tete() {
    let s = session("-5+2=");
    assert_eq!(s.affichage, "-3");
}

#[test]
fn egal_sur_expression_vide() {
    let mut s = Session::default();
    s.appuyer(Touche::Egal);
    assert_eq!(s.affichage, "0");
    assert!(s.historique.is_empty());
    assert!(!s.vient_d_evaluer);
}

#[test]
fn expression_incomplete_en_erreur() {
    let s = session("2+=");
    assert!(s.en_erreur);
    assert!(s.message_erreur.starts_with("expression mal formée"));
}

/* ------------------------ Fonctions / ANS ------------------------ */

#[test]
fn fonction_apres_resultat_vide_expression() {
    let s = session("4+5=sqrt(");
    assert_eq!(s.expression, "sqrt(");
    assert!(!s.vient_d_evaluer);
}

#[test]
fn ans_concatene_en_cours_de_saisie() {
    let s = session("2+3=*2=");
    assert_eq!(s.dernier_resultat, 10.0);

    let s = session("2+3=c1+ans=");
    assert_eq!(s.affichage, "6");
}

#[test]
fn ans_remplace_apres_resultat() {
    let s = session("2+3=ans");
    assert_eq!(s.expression, "5");
    assert_eq!(s.affichage, "5");
    assert!(!s.vient_d_evaluer);
}

#[test]
fn ans_par_code() {
    let mut s = session("6*7=");
    s.appuyer_code(101);
    assert!(s.appuyer_code(205));
    assert_eq!(s.expression, "42");
}

/* ------------------------ Retour arrière ------------------------ */

#[test]
fn retour_retire_ouverture_entiere() {
    let mut s = session("sin(");
    assert_eq!(s.expression, "sin(");
    s.appuyer(Touche::Controle(Controle::Retour));
    assert_eq!(s.expression, "");
    assert_eq!(s.affichage, "0");
}

#[test]
fn retour_prefere_ouverture_la_plus_longue() {
    let mut s = session("2*asin(");
    s.appuyer(Touche::Controle(Controle::Retour));
    assert_eq!(s.expression, "2*");
}

#[test]
fn retour_caractere_par_caractere() {
    let mut s = session("123");
    s.appuyer(Touche::Controle(Controle::Retour));
    assert_eq!(s.expression, "12");
    assert_eq!(s.affichage, "12");
    s.saisir("del del");
    assert_eq!(s.expression, "");
    assert_eq!(s.affichage, "0");
    s.saisir("del");
    assert_eq!(s.affichage, "0");
    s.verifier_invariants().unwrap();
}

#[test]
fn retour_apres_resultat_efface() {
    let mut s = session("2+3=");
    s.appuyer(Touche::Controle(Controle::Retour));
    assert_eq!(s.expression, "");
    assert_eq!(s.affichage, "0");
    assert!(!s.vient_d_evaluer);
}

/* ------------------------ Signe ------------------------ */

#[test]
fn signe_sur_affichage_seul() {
    let mut s = Session::default();
    s.affichage = "7".to_string();
    s.appuyer(Touche::Controle(Controle::Signe));
    assert_eq!(s.affichage, "-7");
}

#[test]
fn signe_sur_zero_sans_effet() {
    let mut s = Session::default();
    s.appuyer(Touche::Controle(Controle::Signe));
    assert_eq!(s.affichage, "0");
    assert_eq!(s.expression, "");
}

#[test]
fn signe_dans_expression() {
    let mut s = session("5+3");
    s.appuyer(Touche::Controle(Controle::Signe));
    assert_eq!(s.expression, "5+(-3)");
    assert_eq!(s.affichage, "-3");
    s.appuyer(Touche::Egal);
    assert_eq!(s.affichage, "2");
}

#[test]
fn signe_dans_argument_de_fonction() {
    let mut s = session("sin(30");
    s.appuyer(Touche::Controle(Controle::Signe));
    assert_eq!(s.expression, "sin(-30");
    s.saisir(")");
    assert_eq!(s.expression, "sin(-30)");

    s.appuyer(Touche::Controle(Controle::Signe));
    assert_eq!(s.expression, "sin(30)");
    assert_eq!(s.affichage, "30");

    s.appuyer(Touche::Egal);
    assert!(!s.en_erreur, "{}", s.message_erreur);
    assert_eq!(s.affichage, "0.5");
}

#[test]
fn signe_aller_retour() {
    let mut s = session("5+3");
    s.saisir("neg neg");
    assert_eq!(s.expression, "5+3");
    assert_eq!(s.affichage, "3");
}

#[test]
fn signe_apres_resultat() {
    let mut s = session("2+3=");
    s.appuyer(Touche::Controle(Controle::Signe));
    assert_eq!(s.affichage, "-5");
    assert_eq!(s.expression, "-5");
    assert_eq!(s.dernier_resultat, -5.0);
    assert!(!s.vient_d_evaluer);
    s.saisir("*2=");
    assert_eq!(s.affichage, "-10");
}

/* ------------------------ Erreur / effacement / modes ------------------------ */

#[test]
fn effacer_pendant_erreur() {
    let mut s = session("5/0=");
    s.appuyer(Touche::Controle(Controle::Effacer));
    assert!(!s.en_erreur);
    assert!(s.message_erreur.is_empty());
    assert_eq!(s.affichage, "0");
    assert_eq!(s.expression, "");
}

#[test]
fn touche_apres_erreur_repart_proprement() {
    let mut s = session("5/0=");
    s.appuyer(Touche::Chiffre(8));
    assert!(!s.en_erreur);
    assert_eq!(s.affichage, "8");
    assert_eq!(s.expression, "8");
}

#[test]
fn mode_sombre_ne_touche_rien_d_autre() {
    let mut s = session("1+2");
    s.appuyer_code(100);
    assert!(s.mode_sombre);
    assert_eq!(s.expression, "1+2");
    assert_eq!(s.affichage, "2");
    s.saisir("theme");
    assert!(!s.mode_sombre);
}

#[test]
fn code_inconnu_ignore() {
    let mut s = session("1+2");
    assert!(!s.appuyer_code(999));
    assert_eq!(s.expression, "1+2");
}

#[test]
fn saisie_ignore_l_inconnu() {
    let mut s = Session::default();
    assert_eq!(s.saisir("2 % 3 foo"), 2);
    assert_eq!(s.expression, "23");
}

#[test]
fn resultat_non_fini_formate() {
    let s = session("10^400=");
    assert!(!s.en_erreur);
    assert_eq!(s.affichage, "Infinity");
    assert_eq!(s.historique.derniere(), Some("10^400 = Infinity"));
}

/* ------------------------ Historique borné ------------------------ */

#[test]
fn historique_cinq_entrees_fifo() {
    let mut s = Session::default();
    for k in 1..=7 {
        s.saisir(&format!("c{k}+0="));
    }
    assert_eq!(s.historique.len(), 5);
    assert_eq!(
        s.historique.iter().collect::<Vec<_>>(),
        vec!["3+0 = 3", "4+0 = 4", "5+0 = 5", "6+0 = 6", "7+0 = 7"]
    );
}

/* ------------------------ Propriétés ------------------------ */

fn strategie_touche() -> impl Strategy<Value = Touche> {
    let operateurs = prop::sample::select(vec![
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ]);
    let controles = prop::sample::select(vec![
        Controle::ModeSombre,
        Controle::Effacer,
        Controle::Retour,
        Controle::Signe,
        Controle::ModeAngle,
        Controle::Ans,
    ]);
    prop_oneof![
        4 => (0u8..=9).prop_map(Touche::Chiffre),
        1 => Just(Touche::Point),
        2 => operateurs.prop_map(Touche::Operateur),
        1 => Just(Touche::ParentheseOuvrante),
        1 => Just(Touche::ParentheseFermante),
        1 => prop::sample::select(Fonction::TOUTES.to_vec()).prop_map(Touche::Fonction),
        1 => controles.prop_map(Touche::Controle),
        2 => Just(Touche::Egal),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_sous_toute_sequence(touches in prop::collection::vec(strategie_touche(), 0..120)) {
        let mut s = Session::default();
        for t in touches {
            s.appuyer(t);
            prop_assert!(s.verifier_invariants().is_ok(), "{:?} après {:?}", s.verifier_invariants(), t);
            prop_assert!(s.historique.len() <= 5);
        }
    }

    #[test]
    fn prop_codes_equivalents_aux_touches(touches in prop::collection::vec(strategie_touche(), 0..60)) {
        let mut par_touche = Session::default();
        let mut par_code = Session::default();
        for t in touches {
            par_touche.appuyer(t);
            prop_assert!(par_code.appuyer_code(t.code()));
        }
        prop_assert_eq!(par_touche.affichage, par_code.affichage);
        prop_assert_eq!(par_touche.expression, par_code.expression);
        prop_assert_eq!(par_touche.historique, par_code.historique);
    }
}
