//! Noyau — évaluation (pipeline réel)
//!
//! garde-fous -> tokenize -> RPN -> Expr -> valeur
//!
//! Grammaire bornée : nombres, + - * /, parenthèses, signes unaires.
//! Aucune autre construction n’est reconnue (pas de noms, pas d’appels).

use tracing::debug;

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};
use super::valeur::Valeur;

/// Garde-fou : longueur maximale de l’entrée (en caractères).
pub const LONGUEUR_MAX: usize = 4096;

/// API publique : évalue une expression arithmétique.
pub fn eval_expression(expr_str: &str) -> Result<Valeur, ErreurCalc> {
    let longueur = expr_str.chars().count();
    if longueur > LONGUEUR_MAX {
        return Err(ErreurCalc::TropLongue(longueur));
    }

    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "expression découpée"
    );

    // 3) AST (Expr) puis valeur
    let expr = from_rpn(&rpn)?;
    let v = expr.evaluer()?;
    debug!(arbre = %expr, resultat = %v, "expression évaluée");

    Ok(v)
}
