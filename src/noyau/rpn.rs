// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - '-' / '+' quand on n’attend PAS une valeur => opérateur préfixe (Neg / Pos)
// - Les préfixes lient plus fort que * et / : "-2*3" => "2 neg 3 *"
// - Juxtaposition refusée : "2(3)", "(1)(2)", "2 3" => expression invalide

use super::erreur::ErreurCalc;
use super::expr::Expr;
use super::jetons::Tok;
use super::valeur::Valeur;

/// Garde-fou : profondeur maximale de l’AST reconstruit.
pub const PROFONDEUR_MAX: usize = 1024;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Entier(2), Star, Minus, LPar, Entier(1), Plus, Entier(3), RPar]
///   rpn:    [Entier(2), Entier(1), Entier(3), Plus, Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Entier(_) | Tok::Flottant(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalc::ParentheseInattendue),
                    }
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler (associatif à droite)
                ops.push(if tok == Tok::Minus { Tok::Neg } else { Tok::Pos });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg | Tok::Pos => return Err(ErreurCalc::ExpressionInvalide),
        }
    }

    if !prev_was_value {
        return Err(ErreurCalc::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN (pile, sans récursion).
/// Refuse un arbre plus profond que PROFONDEUR_MAX.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalc> {
    // (sous-arbre, profondeur)
    let mut st: Vec<(Expr, usize)> = Vec::new();

    for tok in rpn.iter().cloned() {
        let (e, prof) = match tok {
            Tok::Entier(n) => (Expr::Nombre(Valeur::Entier(n)), 1),
            Tok::Flottant(x) => (Expr::Nombre(Valeur::Flottant(x)), 1),

            // +x : aucune transformation, mais compte dans la profondeur
            Tok::Pos => {
                let (x, p) = st.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                (x, p + 1)
            }
            Tok::Neg => {
                let (x, p) = st.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                (Expr::Neg(Box::new(x)), p + 1)
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let (b, pb) = st.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                let (a, pa) = st.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                let (a, b) = (Box::new(a), Box::new(b));
                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    _ => Expr::Div(a, b),
                };
                (e, pa.max(pb) + 1)
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalc::ExpressionInvalide),
        };

        if prof > PROFONDEUR_MAX {
            return Err(ErreurCalc::TropProfonde(PROFONDEUR_MAX));
        }
        st.push((e, prof));
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(ErreurCalc::ExpressionInvalide),
    }
}
