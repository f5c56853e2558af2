use crate::dictionary::DictionaryError;
use crate::types::DocumentError;
use crate::types::config::AppConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("config error: {0}")]
    Config(#[from] AppConfigError),
}
