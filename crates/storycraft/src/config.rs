//! Workspace configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storycraft_error::{ConfigError, StorycraftResult};
use storycraft_storage::JsonScriptRepository;

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_author() -> String {
    "Anonymous".to_string()
}

/// Engine configuration, loaded from a TOML file with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct StorycraftConfig {
    /// Model tag recorded on generated scripts
    #[serde(default = "default_model")]
    model: String,
    /// Attribution printed on exported title pages
    #[serde(default = "default_author")]
    author: String,
    /// Override for the script library location
    #[serde(default)]
    data_path: Option<PathBuf>,
}

impl Default for StorycraftConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            author: default_author(),
            data_path: None,
        }
    }
}

impl StorycraftConfig {
    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> StorycraftResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            storycraft_error::StorycraftError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            storycraft_error::StorycraftError::from(ConfigError::new(format!(
                "Failed to parse config: {}",
                e
            )))
        })
    }

    /// Load from `STORYCRAFT_CONFIG` if set, falling back to defaults when
    /// no file exists.
    pub fn load() -> StorycraftResult<Self> {
        match std::env::var("STORYCRAFT_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Where the script library lives: the configured override, or the
    /// platform default.
    pub fn library_path(&self) -> StorycraftResult<PathBuf> {
        match &self.data_path {
            Some(path) => Ok(path.clone()),
            None => JsonScriptRepository::default_path(),
        }
    }
}
