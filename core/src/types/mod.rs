pub mod config;
pub use config::{AppConfig, FragmentPolicy, LoggingConfig, MIN_WHOLE_WORD_LEN, SearchConfig};

pub(crate) mod document;
pub use document::{
    Display, Document, DocumentError, MEANING_CLASS, NodeId, SPEECH_TYPE_CLASS, WORD_CLASS,
};

pub(crate) mod word;
pub use word::{MAX_WORD_LENGTH, Word, WordEntry, WordError};
