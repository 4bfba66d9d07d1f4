// src/noyau/expr.rs
//
// AST arithmétique (borné).
// - Nombre : littéral (entier exact ou flottant)
// - Neg    : moins unaire
// - Add/Sub/Mul/Div : opérateurs binaires
//
// Pas de variables, pas d’appels : l’arbre ne peut QUE calculer.
// Profondeur bornée à la construction (rpn::PROFONDEUR_MAX), donc récursion sûre.

use std::fmt;

use super::erreur::ErreurCalc;
use super::valeur::Valeur;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(Valeur),
    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l’arbre (gauche puis droite).
    pub fn evaluer(&self) -> Result<Valeur, ErreurCalc> {
        use Expr::*;

        match self {
            Nombre(v) => Ok(v.clone()),
            Neg(x) => Ok(x.evaluer()?.oppose()),
            Add(a, b) => a.evaluer()?.additionner(b.evaluer()?),
            Sub(a, b) => a.evaluer()?.soustraire(b.evaluer()?),
            Mul(a, b) => a.evaluer()?.multiplier(b.evaluer()?),
            Div(a, b) => a.evaluer()?.diviser(b.evaluer()?),
        }
    }
}

/// Forme entièrement parenthésée (journal).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Nombre(v) => write!(f, "{v}"),
            Neg(x) => write!(f, "-({x})"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}
