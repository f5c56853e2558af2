//! Element searcher over a fixed, ordered element set.

use crate::error::SearchError;
use crate::host::{Surface, TextTree};
use crate::index::{self, TextIndex};
use crate::query::SearchQuery;
use std::fmt;
use tracing::{debug, trace};
use wordsift_core::types::SearchConfig;

/// Position of an element in the set the searcher was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shows and hides elements by matching a query against each element's text.
///
/// Elements are host handles; the searcher never reads them back after
/// construction. Each element's subtree text is flattened once, so changes
/// the host makes to element content later are not seen.
pub struct ElementSearcher<H> {
    elements: Vec<H>,
    index: TextIndex,
    config: SearchConfig,
}

/// Create operations.
impl<H: Copy> ElementSearcher<H> {
    /// Indexes `elements` in iteration order; the n-th element gets id `n`.
    ///
    /// Fails only when an element's subtree nests deeper than
    /// `config.max_depth`, which also catches cyclic trees.
    pub fn new<T>(
        tree: &T,
        elements: impl IntoIterator<Item = H>,
        config: SearchConfig,
    ) -> Result<Self, SearchError>
    where
        T: TextTree<Handle = H>,
    {
        let elements: Vec<H> = elements.into_iter().collect();
        let mut index = TextIndex::default();

        for (position, element) in elements.iter().enumerate() {
            let text = index::flatten(tree, *element, config.fragments, config.max_depth)
                .map_err(|_| SearchError::DepthExceeded {
                    element: ElementId(position),
                    max_depth: config.max_depth,
                })?;
            index.push(text);
        }

        debug!(elements = index.len(), "element index built");

        Ok(Self {
            elements,
            index,
            config,
        })
    }
}

/// Search operations.
impl<H: Copy> ElementSearcher<H> {
    /// Recomputes visibility of every element for `query`.
    ///
    /// An absent or empty query shows everything. Otherwise an element is
    /// shown iff its text contains `query` verbatim. Elements whose text also
    /// contains the query as a whole word, ignoring case, are reported through
    /// [`Surface::whole_word_match`].
    pub fn search<S: Surface<H>>(&self, query: Option<&str>, surface: &mut S) {
        let query = SearchQuery::parse(query, self.config.min_whole_word_len);
        self.apply(&query, surface);
    }

    /// Shows every element.
    pub fn show_all<S: Surface<H>>(&self, surface: &mut S) {
        for element in &self.elements {
            surface.show(*element);
        }
    }

    fn apply<S: Surface<H>>(&self, query: &SearchQuery<'_>, surface: &mut S) {
        let Some(raw) = query.raw() else {
            self.show_all(surface);
            return;
        };

        let mut visible = 0;
        for (id, element, text) in self.iter() {
            if query.matches(text) {
                surface.show(element);
                visible += 1;
            } else {
                surface.hide(element);
            }

            if query.matches_whole_word(text) {
                debug!(%id, text, "whole-word match");
                surface.whole_word_match(id, element);
            }
        }

        trace!(query = raw, visible, total = self.len(), "query evaluated");
    }
}

/// Read operations.
impl<H: Copy> ElementSearcher<H> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Cached text of `id`.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.index.get(id.0)
    }

    pub fn element(&self, id: ElementId) -> Option<H> {
        self.elements.get(id.0).copied()
    }

    /// Every element with its id and cached text, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, H, &str)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(position, element)| {
                let text = self.index.get(position)?;
                Some((ElementId(position), *element, text))
            })
    }
}
