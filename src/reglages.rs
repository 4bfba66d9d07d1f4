//! src/reglages.rs
//!
//! Réglages utilisateur (présentation + journal), lus depuis
//! `<config_dir>/calculatrice-sci/reglages.toml`.
//!
//! ```toml
//! theme_sombre = false
//! fichier_export = "historique.txt"
//! niveau_log = "warn"
//! ```
//!
//! Fichier absent => valeurs par défaut. Fichier invalide => avertissement + défauts.
//! Aucun réglage n’influence le calcul.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DOSSIER_APP: &str = "calculatrice-sci";
const NOM_FICHIER: &str = "reglages.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Thème au lancement (false = clair).
    pub theme_sombre: bool,
    /// Chemin proposé dans la fenêtre "Save".
    pub fichier_export: PathBuf,
    /// Filtre tracing par défaut (RUST_LOG reste prioritaire).
    pub niveau_log: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            theme_sombre: false,
            fichier_export: PathBuf::from("historique.txt"),
            niveau_log: "warn".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin} impossible: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{chemin} invalide: {source}")]
    Format {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Reglages {
    /// Emplacement standard du fichier (None si pas de dossier de config, ex: wasm).
    pub fn chemin_standard() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(NOM_FICHIER))
    }

    /// Lit un fichier précis. Absent => Ok(défauts).
    pub fn charger_depuis(chemin: &Path) -> Result<Self, ErreurReglages> {
        let texte = match fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ErreurReglages::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };
        Self::depuis_toml(&texte).map_err(|source| ErreurReglages::Format {
            chemin: chemin.to_path_buf(),
            source,
        })
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(texte)
    }

    /// Chargement “tolérant” au démarrage : jamais d’échec, au pire les défauts.
    ///
    /// Appelé avant l’installation du journal : l’avertissement éventuel est
    /// retourné pour être journalisé ensuite.
    pub fn charger() -> (Self, Option<ErreurReglages>) {
        let Some(chemin) = Self::chemin_standard() else {
            return (Self::default(), None);
        };
        match Self::charger_depuis(&chemin) {
            Ok(r) => (r, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
