//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la session de calcul et l’état purement visuel
//! (thème, fenêtres ouvertes, chemin d’export, message de statut).
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `SessionCalc` (noyau).
//! - Le thème et les fenêtres n’ont aucun effet sur la session.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::noyau::{Action, Export, SessionCalc};
use crate::reglages::Reglages;

/// Grille des touches (5 rangées × 6 colonnes).
pub const TOUCHES: [[&str; 6]; 5] = [
    ["7", "8", "9", "/", "sqrt", "log"],
    ["4", "5", "6", "*", "sin", "cos"],
    ["1", "2", "3", "-", "tan", "Del"],
    ["0", ".", "=", "+", "Clear", "⟳"],
    ["Ans", "π", "x²", "Theme", "Save", "History"],
];

/// Touches de présentation (pas d’effet sur la session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheUi {
    Theme,
    Historique,
    Sauver,
}

impl ToucheUi {
    pub fn depuis_libelle(libelle: &str) -> Option<ToucheUi> {
        match libelle {
            "Theme" => Some(ToucheUi::Theme),
            "History" | "⟳" => Some(ToucheUi::Historique),
            "Save" => Some(ToucheUi::Sauver),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statut {
    Info(String),
    Erreur(String),
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub session: SessionCalc,

    // --- présentation ---
    pub theme_sombre: bool,
    pub fenetre_historique: bool,
    pub fenetre_export: bool,
    pub chemin_export: String,
    pub statut: Option<Statut>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn depuis_reglages(reglages: &Reglages) -> Self {
        Self {
            session: SessionCalc::new(),
            theme_sombre: reglages.theme_sombre,
            fenetre_historique: false,
            fenetre_export: false,
            chemin_export: reglages.fichier_export.display().to_string(),
            statut: None,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Touches ------------------------ */

    /// Un clic sur une touche de la grille.
    pub fn appuyer(&mut self, libelle: &str) {
        if let Some(action) = Action::depuis_libelle(libelle) {
            self.executer(action);
        } else if let Some(t) = ToucheUi::depuis_libelle(libelle) {
            match t {
                ToucheUi::Theme => self.basculer_theme(),
                ToucheUi::Historique => self.fenetre_historique = true,
                ToucheUi::Sauver => self.demander_export(),
            }
        }
        self.focus_entree = true;
    }

    pub fn executer(&mut self, action: Action) {
        self.session.executer(action);
        self.focus_entree = true;
    }

    /// ESC : efface seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.session.effacer();
        self.focus_entree = true;
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    /* ------------------------ Export ------------------------ */

    /// "Save" : historique vide => message direct, sinon fenêtre de chemin.
    pub fn demander_export(&mut self) {
        if self.session.historique().is_empty() {
            self.statut = Some(Statut::Info("No history to save.".into()));
            return;
        }
        self.statut = None;
        self.fenetre_export = true;
    }

    /// Écrit l’historique vers `chemin_export` et dépose le statut.
    pub fn exporter(&mut self) {
        let chemin = PathBuf::from(self.chemin_export.trim());
        if chemin.as_os_str().is_empty() {
            self.statut = Some(Statut::Erreur("Chemin d’export vide".into()));
            return;
        }

        self.statut = Some(match self.session.exporter_historique(&chemin) {
            Ok(Export::RienAExporter) => Statut::Info("No history to save.".into()),
            Ok(Export::Ecrit { lignes }) => {
                info!(lignes, "export demandé depuis la vue");
                self.fenetre_export = false;
                Statut::Info("History saved successfully.".into())
            }
            Err(e) => {
                warn!(erreur = %e, "export refusé");
                Statut::Erreur(e.to_string())
            }
        });
    }
}
