use super::search::{
    MIN_WHOLE_WORD_LEN, SearchConfig, default_max_depth, default_min_whole_word_len,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// User-facing configuration, persisted as wordsift.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("wordsift.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.min_whole_word_len < MIN_WHOLE_WORD_LEN {
            errors.push(format!(
                "search.min_whole_word_len must be at least {MIN_WHOLE_WORD_LEN}"
            ));
        }

        if self.search.max_depth == 0 {
            errors.push("search.max_depth must be at least 1".to_string());
        }

        if self.logging.filter.trim().is_empty() {
            errors.push("logging.filter must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        for error in self.validate() {
            warn!("{error}; using default");
        }

        let defaults = Self::default();
        Self {
            search: SearchConfig {
                min_whole_word_len: if self.search.min_whole_word_len < MIN_WHOLE_WORD_LEN {
                    default_min_whole_word_len()
                } else {
                    self.search.min_whole_word_len
                },
                fragments: self.search.fragments,
                max_depth: if self.search.max_depth == 0 {
                    default_max_depth()
                } else {
                    self.search.max_depth
                },
            },
            logging: LoggingConfig {
                filter: if self.logging.filter.trim().is_empty() {
                    defaults.logging.filter
                } else {
                    self.logging.filter.clone()
                },
            },
        }
    }
}

/// Log output settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `info` or `wordsift_search=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
