//! Error types for the CLI.

use stepscan_core::types::StepscanError;
use stepscan_core::workflow::RunError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Function lookup or parameter error
    #[error(transparent)]
    Action(#[from] StepscanError),

    /// Renderer failure
    #[error("Render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> From<RunError<E>> for CliError
where
    E: std::error::Error + 'static,
{
    fn from(err: RunError<E>) -> Self {
        match err {
            RunError::Action(e) => CliError::Action(e),
            RunError::Render(e) => CliError::Render(e.to_string()),
        }
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
