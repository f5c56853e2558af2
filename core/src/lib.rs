//! Host-side building blocks for wordsift.
//!
//! - [`types::Document`]: an arena-backed display tree whose elements carry a
//!   visibility state.
//! - [`types::WordEntry`]: a dictionary word with its meanings per speech type,
//!   rendered into a `Document` element.
//! - [`dictionary::Dictionary`]: a TOML word list.
//! - [`types::config`]: user-facing configuration shared with the searcher.

pub mod dictionary;
pub mod error;
pub mod types;

pub use error::{Error, Result};
