//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - session.rs   : SessionCalc (entrée, historique, Ans, export)
//! - action.rs    : Action (touche -> opération de session)
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : AST arithmétique borné
//! - eval.rs      : pipeline complet
//! - valeur.rs    : entier exact / flottant
//! - format.rs    : affichage des flottants
//! - fonctions.rs : sqrt, log10, trig (degrés), carré
//! - erreur.rs    : erreurs typées

pub mod action;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod session;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use action::Action;
pub use erreur::{ErreurCalc, ErreurExport};
pub use eval::eval_expression;
pub use fonctions::Fonction;
pub use session::{Export, SessionCalc};
pub use valeur::Valeur;
