//! TOML word lists.
//!
//! ```toml
//! [[words]]
//! word = "run"
//!
//! [words.meanings]
//! verb = "to move swiftly on foot"
//! noun = "an act of running"
//! ```

use crate::types::{Document, NodeId, WordEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

impl Dictionary {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self { words }
    }

    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), words = dictionary.words.len(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DictionaryError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictionaryError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Renders every entry into a fresh document.
    ///
    /// The returned ids are the word elements, in dictionary order.
    pub fn build_document(&self) -> (Document, Vec<NodeId>) {
        let mut document = Document::new();
        let elements = self
            .words
            .iter()
            .map(|entry| document.build_word(entry))
            .collect();
        (document, elements)
    }
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
