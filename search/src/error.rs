use crate::engine::ElementId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The subtree under `element` nests deeper than `max_depth`, or is cyclic.
    #[error("element {element} nests deeper than {max_depth} levels")]
    DepthExceeded { element: ElementId, max_depth: usize },
}
