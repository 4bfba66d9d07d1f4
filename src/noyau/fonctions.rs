// src/noyau/fonctions.rs
//
// Fonctions scientifiques appliquées au nombre affiché.
// - Trig en DEGRÉS (conversion interne en radians)
// - Domaine vérifié avant calcul : aucune valeur “inventée”

use super::erreur::ErreurCalc;
use super::jetons::sans_separateurs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Log10,
    Sin,
    Cos,
    Tan,
    Carre,
}

impl Fonction {
    #[cfg(test)]
    const TOUTES: [Fonction; 6] = [
        Fonction::Racine,
        Fonction::Log10,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Carre,
    ];

    /// Nom → fonction ("log" est l’alias du bouton pour log10).
    pub fn depuis_nom(nom: &str) -> Result<Fonction, ErreurCalc> {
        match nom {
            "sqrt" => Ok(Fonction::Racine),
            "log" | "log10" => Ok(Fonction::Log10),
            "sin" => Ok(Fonction::Sin),
            "cos" => Ok(Fonction::Cos),
            "tan" => Ok(Fonction::Tan),
            "square" => Ok(Fonction::Carre),
            autre => Err(ErreurCalc::FonctionInconnue(autre.to_string())),
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Racine => "sqrt",
            Fonction::Log10 => "log10",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Carre => "square",
        }
    }

    pub fn appliquer(self, x: f64) -> Result<f64, ErreurCalc> {
        match self {
            Fonction::Racine => {
                if x < 0.0 {
                    return Err(ErreurCalc::HorsDomaine("sqrt"));
                }
                Ok(x.sqrt())
            }
            Fonction::Log10 => {
                if x <= 0.0 {
                    return Err(ErreurCalc::HorsDomaine("log10"));
                }
                Ok(x.log10())
            }
            Fonction::Sin | Fonction::Cos | Fonction::Tan => {
                if x.is_infinite() {
                    return Err(ErreurCalc::HorsDomaine(self.nom()));
                }
                let r = x.to_radians();
                Ok(match self {
                    Fonction::Sin => r.sin(),
                    Fonction::Cos => r.cos(),
                    _ => r.tan(),
                })
            }
            Fonction::Carre => {
                let y = x * x;
                if y.is_infinite() && x.is_finite() {
                    return Err(ErreurCalc::Debordement);
                }
                Ok(y)
            }
        }
    }
}

/// Lit le contenu du champ comme UN flottant (espaces autour tolérés, inf/nan acceptés,
/// `_` permis entre deux chiffres).
pub fn lire_flottant(s: &str) -> Result<f64, ErreurCalc> {
    let t = s.trim();
    sans_separateurs(t)
        .and_then(|propre| propre.parse::<f64>().ok())
        .ok_or_else(|| ErreurCalc::NombreInvalide(t.to_string()))
}
