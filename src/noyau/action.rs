// src/noyau/action.rs
//
// Actions “touches” -> session.
// Table statique : un libellé de touche = une Action = une méthode de SessionCalc.
// Les touches purement visuelles (Theme, Save, History, ⟳) ne sont PAS des actions :
// elles restent côté vue.

use super::fonctions::Fonction;
use super::session::SessionCalc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Inserer(String),
    SupprimerDernier,
    Effacer,
    Evaluer,
    Fonction(Fonction),
    InsererPi,
    InsererDernierResultat,
}

impl Action {
    /// Libellé de touche -> action. `None` pour les touches de présentation.
    pub fn depuis_libelle(libelle: &str) -> Option<Action> {
        let a = match libelle {
            "=" => Action::Evaluer,
            "Clear" => Action::Effacer,
            "Del" => Action::SupprimerDernier,
            "π" => Action::InsererPi,
            "Ans" => Action::InsererDernierResultat,

            "sqrt" => Action::Fonction(Fonction::Racine),
            "log" => Action::Fonction(Fonction::Log10),
            "sin" => Action::Fonction(Fonction::Sin),
            "cos" => Action::Fonction(Fonction::Cos),
            "tan" => Action::Fonction(Fonction::Tan),
            "x²" => Action::Fonction(Fonction::Carre),

            "Theme" | "Save" | "History" | "⟳" => return None,

            // chiffres, point, opérateurs, parenthèses : insertion littérale
            autre => Action::Inserer(autre.to_string()),
        };
        Some(a)
    }
}

impl SessionCalc {
    /// Exécute une action (une seule opération de session, jusqu’au bout).
    pub fn executer(&mut self, action: Action) {
        match action {
            Action::Inserer(t) => self.inserer(&t),
            Action::SupprimerDernier => self.supprimer_dernier(),
            Action::Effacer => self.effacer(),
            Action::Evaluer => {
                self.evaluer();
            }
            Action::Fonction(f) => {
                self.appliquer_fonction(f);
            }
            Action::InsererPi => self.inserer_pi(),
            Action::InsererDernierResultat => self.inserer_dernier_resultat(),
        }
    }
}
