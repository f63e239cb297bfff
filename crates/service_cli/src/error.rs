//! Error types for the CLI.

use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contract parameters rejected by the models
    #[error("Invalid input: {0}")]
    Analytical(#[from] AnalyticalError),

    /// Inconsistent or missing command-line arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
