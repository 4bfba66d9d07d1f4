//! Session de calcul : entrée éditable, historique, dernier résultat.
//!
//! Contrats :
//! - `dernier_resultat` est `None` tant qu’aucune évaluation n’a réussi.
//! - Chaque ligne d’historique = exactement une évaluation réussie, dans l’ordre.
//! - Les erreurs de calcul ne sortent jamais d’ici : l’entrée devient `"Error"`.
//! - Seul l’export remonte une erreur (I/O demandée explicitement par l’utilisateur).

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::erreur::{ErreurCalc, ErreurExport};
use super::eval::eval_expression;
use super::fonctions::{lire_flottant, Fonction};
use super::format::format_flottant;
use super::valeur::Valeur;

/// Marqueur affiché dans l’entrée après un échec.
pub const MARQUEUR_ERREUR: &str = "Error";

/// π arrondi à 8 décimales.
pub const PI_TEXTE: &str = "3.14159265";

/// Issue d’un export d’historique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Export {
    RienAExporter,
    Ecrit { lignes: usize },
}

#[derive(Clone, Debug, Default)]
pub struct SessionCalc {
    entree: String,
    historique: Vec<String>,
    dernier_resultat: Option<Valeur>,
}

impl SessionCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn entree(&self) -> &str {
        &self.entree
    }

    /// Accès direct pour le champ texte (édition clavier).
    ///
    /// Seule exception à la règle "entrée modifiée uniquement par les
    /// opérations de la session" : le `TextEdit` d’egui édite le tampon en place
    /// (frappe et collage). Historique et dernier résultat restent
    /// hors d’atteinte.
    pub fn entree_mut(&mut self) -> &mut String {
        &mut self.entree
    }

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    pub fn dernier_resultat(&self) -> Option<&Valeur> {
        self.dernier_resultat.as_ref()
    }

    /* ------------------------ Édition ------------------------ */

    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
    }

    /// Retire le dernier caractère (sans effet si vide).
    pub fn supprimer_dernier(&mut self) {
        self.entree.pop();
    }

    pub fn effacer(&mut self) {
        self.entree.clear();
    }

    pub fn inserer_pi(&mut self) {
        self.entree.push_str(PI_TEXTE);
    }

    /// "Ans" : rien tant qu’aucune évaluation n’a réussi.
    pub fn inserer_dernier_resultat(&mut self) {
        if let Some(v) = &self.dernier_resultat {
            self.entree.push_str(&v.to_string());
        }
    }

    /* ------------------------ Calcul ------------------------ */

    /// "=" : évalue l’entrée. Retourne true si le calcul a réussi.
    pub fn evaluer(&mut self) -> bool {
        self.evaluer_detail().is_ok()
    }

    /// Comme `evaluer`, mais garde la cause de l’échec (journal / tests).
    /// L’état est déjà mis à jour ("Error" en cas d’échec).
    pub fn evaluer_detail(&mut self) -> Result<Valeur, ErreurCalc> {
        match eval_expression(&self.entree) {
            Ok(v) => {
                let texte = v.to_string();
                self.historique.push(format!("{} = {}", self.entree, texte));
                self.dernier_resultat = Some(v.clone());
                self.entree = texte;
                Ok(v)
            }
            Err(e) => {
                debug!(entree = %self.entree, erreur = %e, "évaluation refusée");
                self.marquer_erreur();
                Err(e)
            }
        }
    }

    /// Fonction scientifique sur le nombre affiché. Ne touche ni l’historique ni "Ans".
    pub fn appliquer_fonction(&mut self, f: Fonction) -> bool {
        match lire_flottant(&self.entree).and_then(|x| f.appliquer(x)) {
            Ok(y) => {
                self.entree = format_flottant(y);
                true
            }
            Err(e) => {
                debug!(fonction = f.nom(), entree = %self.entree, erreur = %e, "fonction refusée");
                self.marquer_erreur();
                false
            }
        }
    }

    /// Variante par nom ("sqrt", "log", "log10", "sin", "cos", "tan", "square").
    /// Nom inconnu => "Error".
    pub fn appliquer_fonction_nommee(&mut self, nom: &str) -> bool {
        match Fonction::depuis_nom(nom) {
            Ok(f) => self.appliquer_fonction(f),
            Err(e) => {
                debug!(erreur = %e, "fonction refusée");
                self.marquer_erreur();
                false
            }
        }
    }

    fn marquer_erreur(&mut self) {
        self.entree.clear();
        self.entree.push_str(MARQUEUR_ERREUR);
    }

    /* ------------------------ Export ------------------------ */

    /// Écrit l’historique (une ligne par entrée, séparées par '\n', sans '\n' final).
    /// Historique vide => aucune écriture.
    pub fn exporter_historique(&self, destination: &Path) -> Result<Export, ErreurExport> {
        if self.historique.is_empty() {
            info!("historique vide : rien à exporter");
            return Ok(Export::RienAExporter);
        }

        let contenu = self.historique.join("\n");
        fs::write(destination, contenu).map_err(|source| {
            warn!(chemin = %destination.display(), erreur = %source, "export impossible");
            ErreurExport::Ecriture {
                chemin: destination.to_path_buf(),
                source,
            }
        })?;

        let lignes = self.historique.len();
        info!(chemin = %destination.display(), lignes, "historique exporté");
        Ok(Export::Ecrit { lignes })
    }
}
