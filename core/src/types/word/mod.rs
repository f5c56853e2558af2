use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_WORD_LENGTH: usize = 256;

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_WORD_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Word(String);

/// A dictionary word with one meaning per speech type.
///
/// Meanings are keyed by speech type (`noun`, `verb`, ...) and kept sorted so
/// the rendered element is stable across loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: Word,
    #[serde(default)]
    pub meanings: BTreeMap<String, String>,
}

impl WordEntry {
    pub fn new(word: Word) -> Self {
        Self {
            word,
            meanings: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the meaning for `speech_type`.
    pub fn with_meaning(
        mut self,
        speech_type: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        self.meanings.insert(speech_type.into(), meaning.into());
        self
    }
}
