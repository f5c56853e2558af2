//! Query normalization and the two match tiers.

use regex::{Regex, RegexBuilder};
use tracing::warn;
use wordsift_core::types::MIN_WHOLE_WORD_LEN;

/// Queries longer than this skip the regex and use [`WholeWord::Scan`].
const REGEX_MAX_CHARS: usize = 4096;

/// A parsed search query.
///
/// An absent or empty query matches everything. Anything else is matched two
/// ways: a case-sensitive substring test on the raw text decides visibility,
/// and an optional case-insensitive whole-word test drives diagnostics.
#[derive(Debug, Clone)]
pub struct SearchQuery<'q> {
    raw: Option<&'q str>,
    /// Present only when the query is long enough for whole-word reporting.
    whole_word: Option<WholeWord>,
}

#[derive(Debug, Clone)]
enum WholeWord {
    /// `(^|\s)<literal>(\s|$)`, case-insensitive.
    Pattern(Regex),
    /// Lowercased literal, searched in lowercased text.
    Scan(String),
}

impl<'q> SearchQuery<'q> {
    /// `min_whole_word_len` is raised to [`MIN_WHOLE_WORD_LEN`] when lower.
    pub fn parse(query: Option<&'q str>, min_whole_word_len: usize) -> Self {
        let Some(raw) = query.filter(|q| !q.is_empty()) else {
            return Self {
                raw: None,
                whole_word: None,
            };
        };

        let chars = raw.chars().count();
        let whole_word = (chars >= min_whole_word_len.max(MIN_WHOLE_WORD_LEN))
            .then(|| WholeWord::new(raw, chars));

        Self {
            raw: Some(raw),
            whole_word,
        }
    }

    pub fn is_all(&self) -> bool {
        self.raw.is_none()
    }

    /// The query text; `None` for the match-everything query.
    pub fn raw(&self) -> Option<&'q str> {
        self.raw
    }

    /// Loose tier: plain, case-sensitive containment of the raw query.
    pub fn matches(&self, text: &str) -> bool {
        self.raw.is_none_or(|raw| text.contains(raw))
    }

    /// Exact tier: the query bounded by whitespace or the ends of `text`,
    /// ignoring case. Always false for queries too short to report.
    pub fn matches_whole_word(&self, text: &str) -> bool {
        match &self.whole_word {
            Some(WholeWord::Pattern(pattern)) => pattern.is_match(text),
            Some(WholeWord::Scan(needle)) => scan_whole_word(&text.to_lowercase(), needle),
            None => false,
        }
    }
}

impl WholeWord {
    fn new(raw: &str, chars: usize) -> Self {
        if chars > REGEX_MAX_CHARS {
            return Self::Scan(raw.to_lowercase());
        }

        let pattern = format!(r"(?:^|\s){}(?:\s|$)", regex::escape(raw));
        match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Self::Pattern(regex),
            Err(err) => {
                warn!(error = %err, "whole-word pattern rejected; scanning instead");
                Self::Scan(raw.to_lowercase())
            }
        }
    }
}

/// Finds `needle` in `haystack` with whitespace or a text boundary on both
/// sides. Overlapping candidates are all tried.
fn scan_whole_word(haystack: &str, needle: &str) -> bool {
    let Some(step) = needle.chars().next().map(char::len_utf8) else {
        return false;
    };

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();

        if before.is_none_or(char::is_whitespace) && after.is_none_or(char::is_whitespace) {
            return true;
        }
        from = start + step;
    }
    false
}
