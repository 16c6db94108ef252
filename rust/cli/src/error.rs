//! Error types for the CLI application.

use std::fmt;

/// Custom error type for CLI operations, covering everything that can go
/// wrong between parsing user input and the engine settling a round. All
/// command handlers propagate through this with the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin/stdout/stderr, history file)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-side rejection or invariant failure
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<felt_engine::errors::GameError> for CliError {
    fn from(error: felt_engine::errors::GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}
