//! CLI error handling

use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid command at line {line}: {message}")]
    InvalidCommand {
        line: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn invalid_command(line: usize, message: impl Into<String>) -> Self {
        CliError::InvalidCommand {
            line,
            message: message.into(),
        }
    }
}
