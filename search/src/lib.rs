//! Wordsift element search library.
//!
//! Filters a fixed, ordered set of display elements by a live text query.
//!
//! # Design
//!
//! - The element set is an arena: element `i` gets [`ElementId`] `i`, and the
//!   text index is a parallel vector of flattened subtree text.
//! - The index is built once at construction and never rebuilt.
//! - Every query recomputes visibility for every element:
//!   - visible iff the cached text contains the raw query (case-sensitive)
//!   - whole-word matches (case-insensitive, whitespace-delimited) are
//!     reported to the surface and logged, without affecting visibility
//! - An empty query shows everything.
//!
//! # Host capabilities
//!
//! - [`TextTree`]: enumerate children, read pure text nodes.
//! - [`Surface`]: receive show/hide directives and whole-word notifications.

mod engine;
mod error;
mod host;
mod index;
mod query;

pub use engine::{ElementId, ElementSearcher};
pub use error::SearchError;
pub use host::{Surface, TextTree};
pub use query::SearchQuery;
pub use wordsift_core::types::{FragmentPolicy, SearchConfig};
