// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ErreurCalc   : évaluation / fonctions (toujours récupérée par la session => "Error")
// - ErreurExport : écriture de l’historique (remontée à la vue)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("entrée trop longue ({0} caractères)")]
    TropLongue(usize),

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante inattendue")]
    ParentheseInattendue,

    #[error("expression trop imbriquée (profondeur > {0})")]
    TropProfonde(usize),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("débordement numérique")]
    Debordement,

    #[error("{0} : argument hors domaine")]
    HorsDomaine(&'static str),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),
}

#[derive(Debug, Error)]
pub enum ErreurExport {
    #[error("écriture impossible vers {chemin}: {source}")]
    Ecriture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },
}
