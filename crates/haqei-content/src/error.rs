use haqei_types::Trigram;
use thiserror::Error;

/// Errors from loading or querying the content store.
///
/// Every variant is a configuration problem in the corpus data, never a
/// caller input error. `Clone` so the lazily-loaded embedded store can hand
/// the same failure to every caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("failed to read content from {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse content from {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("invalid {table}: {reason}")]
    Invalid { table: &'static str, reason: String },

    #[error("no interaction narrative for base {base} and other {other}")]
    MissingInteraction { base: Trigram, other: Trigram },
}

impl ContentError {
    pub(crate) fn invalid(table: &'static str, reason: impl Into<String>) -> Self {
        ContentError::Invalid {
            table,
            reason: reason.into(),
        }
    }
}

/// Errors from loading engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration load failed: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
