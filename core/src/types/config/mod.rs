mod app;
mod search;

pub use app::{AppConfig, AppConfigError, LoggingConfig};
pub use search::{FragmentPolicy, MIN_WHOLE_WORD_LEN, SearchConfig};
