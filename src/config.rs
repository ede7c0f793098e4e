use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chunker::{ChunkerConfig, ConfigError};

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "docsum.toml";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid chunking limits: {0}")]
    Invalid(#[from] ConfigError),
}

/// Contents of `docsum.toml`; every section is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chunking: ChunkerConfig,
    pub ner: NerSettings,
    pub summarizer: SummarizerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NerSettings {
    /// Base URL of the token-classification server
    pub endpoint: Option<String>,
    /// Offline lexicon used instead of the server; relative to the config file
    pub gazetteer: Option<PathBuf>,
    pub timeout_secs: u64,
    pub batch_size: usize,
}

impl Default for NerSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            gazetteer: None,
            timeout_secs: 30,
            batch_size: crate::extractor::DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: None,
            temperature: Some(0.2),
            timeout_secs: 180,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigFileError> {
        let config: AppConfig = toml::from_str(source).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.chunking.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&source, path)?;

        // Relative paths in the file are relative to the file itself
        if let (Some(base), Some(gazetteer)) = (path.parent(), config.ner.gazetteer.as_mut()) {
            if gazetteer.is_relative() {
                *gazetteer = base.join(&*gazetteer);
            }
        }
        Ok(config)
    }

    /// Load `path` if given, else `docsum.toml` if present, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigFileError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
