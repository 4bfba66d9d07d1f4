//! Tests scientifiques (campagne) : propriétés de la session + limites contrôlées.
//!
//! But : vérifier les contrats de bout en bout, sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (longueur, profondeur)
//!
//! Notes :
//! - Les entiers restent exacts (+ - *), la division donne toujours un flottant.
//! - Les sorties affichées doivent être relisibles par l’évaluateur (chaînage "=" puis "=").

use std::time::{Duration, Instant};

use super::eval::LONGUEUR_MAX;
use super::rpn::PROFONDEUR_MAX;
use super::session::{SessionCalc, MARQUEUR_ERREUR};
use super::{eval_expression, Fonction, Valeur};

fn evalue(expr: &str) -> SessionCalc {
    let mut s = SessionCalc::new();
    s.inserer(expr);
    s.evaluer();
    s
}

fn assert_resultat(expr: &str, attendu: &str) {
    let s = evalue(expr);
    assert_eq!(s.entree(), attendu, "expr={expr:?}");
    assert_eq!(s.historique(), [format!("{expr} = {attendu}")], "expr={expr:?}");
}

fn assert_erreur(expr: &str) {
    let s = evalue(expr);
    assert_eq!(s.entree(), MARQUEUR_ERREUR, "expr={expr:?}");
    assert!(s.historique().is_empty(), "expr={expr:?}");
    assert!(s.dernier_resultat().is_none(), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Évaluation : succès ------------------------ */

#[test]
fn sci_valeurs_bien_definies() {
    assert_resultat("2+2", "4");
    assert_resultat("6*7", "42");
    assert_resultat("1-10", "-9");
    assert_resultat("9/3", "3.0");
    assert_resultat("1/8", "0.125");
    assert_resultat("(1+2)*(3+4)", "21");
    assert_resultat("2.5*4", "10.0");
    assert_resultat("1/100000", "1e-05");
    assert_resultat("3.14159265*2", "6.2831853");
}

#[test]
fn sci_chainage_egal_egal() {
    // "=" sur un résultat affiché redonne le même résultat (et l’historique grossit)
    let mut s = evalue("1/3");
    let premier = s.entree().to_string();
    assert!(s.evaluer());
    assert_eq!(s.entree(), premier);
    assert_eq!(s.historique().len(), 2);
    assert_eq!(s.historique()[1], format!("{premier} = {premier}"));
}

/* ------------------------ Évaluation : échecs ------------------------ */

#[test]
fn sci_entrees_mal_formees() {
    for e in [
        "", "   ", "2+", "*3", "(1+2", "1+2)", "()", "2(3)", "1..2", "1e", "abc", "2^3",
        "5%2", "2**3", "Error", "007", "__import__('os')", "π",
    ] {
        assert_erreur(e);
    }
}

#[test]
fn sci_domaine_numerique() {
    assert_erreur("1/0");
    assert_erreur("1/0.0");
    assert_erreur("0/0");
    assert_erreur("5/(3-3)");
}

#[test]
fn sci_division_entiers_geants() {
    let expr = format!("1{}/1{}", "0".repeat(400), "0".repeat(399));
    assert_resultat(&expr, "10.0");
    assert_resultat(&format!("-7/1{}", "0".repeat(400)), "-0.0");
    // quotient hors f64
    assert_erreur(&format!("1{}/3", "0".repeat(400)));
}

#[test]
fn sci_division_entiers_arrondi_unique() {
    assert_resultat("14046286627791492475/8720394264201255075", "1.610739859028388");
    assert_resultat("9007199254740993/1", "9007199254740992.0");
}

#[test]
fn sci_separateurs_de_chiffres() {
    assert_resultat("1_000+1", "1001");
    assert_resultat("1_000.2_5*2", "2000.5");
    assert_resultat("1e1_0", "10000000000.0");
    assert_erreur("1__000");
    assert_erreur("1_");
    assert_erreur("1_.5");
    assert_erreur("0_7");
}

#[test]
fn sci_echec_apres_succes_preserve_etat() {
    let mut s = evalue("20/4");
    let hist = s.historique().to_vec();
    let ans = s.dernier_resultat().cloned();

    s.effacer();
    s.inserer("20/");
    assert!(!s.evaluer());
    assert_eq!(s.entree(), MARQUEUR_ERREUR);
    assert_eq!(s.historique(), hist.as_slice());
    assert_eq!(s.dernier_resultat().cloned(), ans);
    assert_eq!(ans, Some(Valeur::Flottant(5.0)));
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_fonctions_cas_de_reference() {
    let cas = [
        (Fonction::Racine, "-4", None),
        (Fonction::Racine, "4", Some("2.0")),
        (Fonction::Log10, "0", None),
        (Fonction::Log10, "100", Some("2.0")),
        (Fonction::Log10, "-5", None),
        (Fonction::Carre, "-1.5", Some("2.25")),
    ];
    for (f, entree, attendu) in cas {
        let mut s = SessionCalc::new();
        s.inserer(entree);
        s.appliquer_fonction(f);
        assert_eq!(
            s.entree(),
            attendu.unwrap_or(MARQUEUR_ERREUR),
            "{}({entree})",
            f.nom()
        );
    }
}

#[test]
fn sci_trig_degres_tolerance() {
    let cas = [
        (Fonction::Sin, "90", 1.0),
        (Fonction::Sin, "30", 0.5),
        (Fonction::Cos, "60", 0.5),
        (Fonction::Cos, "0", 1.0),
        (Fonction::Tan, "45", 1.0),
        (Fonction::Sin, "-90", -1.0),
        (Fonction::Sin, "450", 1.0),
    ];
    for (f, entree, attendu) in cas {
        let mut s = SessionCalc::new();
        s.inserer(entree);
        assert!(s.appliquer_fonction(f));
        let y: f64 = s.entree().parse().unwrap();
        assert!((y - attendu).abs() < 1e-12, "{}({entree}) = {y}", f.nom());
    }
}

#[test]
fn sci_fonction_sur_expression_refusee() {
    // le champ doit contenir UN nombre, pas une expression
    let mut s = SessionCalc::new();
    s.inserer("2+2");
    assert!(!s.appliquer_fonction(Fonction::Racine));
    assert_eq!(s.entree(), MARQUEUR_ERREUR);
}

/* ------------------------ Ans / π ------------------------ */

#[test]
fn sci_aller_retour_ans() {
    let mut s = evalue("2+2");
    s.effacer();
    s.inserer_dernier_resultat();
    assert_eq!(s.entree(), "4");
}

#[test]
fn sci_pi_insere_puis_evalue() {
    let mut s = SessionCalc::new();
    s.inserer_pi();
    s.inserer("*2");
    assert!(s.evaluer());
    assert_eq!(s.entree(), "6.2831853");
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // somme à gauche : profondeur = nombre de termes
    let n = PROFONDEUR_MAX / 2;
    let expr = vec!["1"; n].join("+");
    budget(t0, max);

    let v = eval_expression(&expr).unwrap();
    assert_eq!(v, Valeur::from(n as i64));
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_imbriquees() {
    // les parenthèses n’ajoutent pas de noeud : profondeur d’AST = 1
    let n = LONGUEUR_MAX / 2 - 1;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_expression(&expr).unwrap(), Valeur::from(7));
}

#[test]
fn sci_stress_bigint() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let big = "9".repeat(100);
    let expr = format!("{big}*{big}+1");
    let v = eval_expression(&expr).unwrap();
    budget(t0, max);

    // (10^100 - 1)^2 + 1 = 10^200 - 2*10^100 + 2
    let texte = v.to_string();
    assert_eq!(texte.len(), 200);
    assert!(texte.starts_with('9'));
    assert!(texte.ends_with("0002"));
}

#[test]
fn sci_limites_refusees_sans_panique() {
    assert!(eval_expression(&"1".repeat(LONGUEUR_MAX + 1)).is_err());
    assert!(eval_expression(&format!("{}1", "-".repeat(PROFONDEUR_MAX + 1))).is_err());
}
