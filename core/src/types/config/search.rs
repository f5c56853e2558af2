use serde::{Deserialize, Serialize};

/// Shortest query ever reported as a whole-word match.
pub const MIN_WHOLE_WORD_LEN: usize = 2;

/// How repeated leaf text inside one element is folded into its cached text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentPolicy {
    /// Identical fragments collapse to their first occurrence.
    #[default]
    Dedup,
    /// Every non-empty fragment is kept, in document order.
    KeepAll,
}

/// Configuration for the element searcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum query length, in characters, before whole-word matches are
    /// reported. Values below [`MIN_WHOLE_WORD_LEN`] are treated as it.
    #[serde(default = "default_min_whole_word_len")]
    pub min_whole_word_len: usize,
    #[serde(default)]
    pub fragments: FragmentPolicy,
    /// Deepest nesting accepted while flattening an element's subtree.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_whole_word_len: default_min_whole_word_len(),
            fragments: FragmentPolicy::default(),
            max_depth: default_max_depth(),
        }
    }
}

pub(super) fn default_min_whole_word_len() -> usize {
    MIN_WHOLE_WORD_LEN
}

pub(super) fn default_max_depth() -> usize {
    512
}
