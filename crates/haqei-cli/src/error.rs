//! CLI error types

use haqei_algebra::AlgebraError;
use haqei_content::ConfigError;
use haqei_engine::EngineError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine or component error
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<AlgebraError> for CliError {
    fn from(err: AlgebraError) -> Self {
        CliError::Engine(err.into())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
