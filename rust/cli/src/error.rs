//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`CliError::exit_code`]
//! maps the failure onto the process exit status.

use std::fmt;

use shortstack_ai::AiError;
use shortstack_engine::errors::GameError;

use crate::config::ConfigError;

/// Success exit code.
pub const EXIT_SUCCESS: i32 = 0;
/// General error exit code.
pub const EXIT_ERROR: i32 = 2;
/// The human seat quit mid-hand.
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, hand history file)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(String),

    /// Engine rejected an operation
    Engine(GameError),

    /// The human seat quit
    Interrupted(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => EXIT_INTERRUPTED,
            _ => EXIT_ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::HandAborted => CliError::Interrupted("hand aborted by player".to_string()),
            other => CliError::Engine(other),
        }
    }
}

impl From<AiError> for CliError {
    fn from(error: AiError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quitting_maps_to_interrupt_code() {
        let e = CliError::from(GameError::HandAborted);
        assert!(matches!(e, CliError::Interrupted(_)));
        assert_eq!(e.exit_code(), EXIT_INTERRUPTED);
    }

    #[test]
    fn other_errors_exit_with_two() {
        let e = CliError::from(GameError::NotEnoughPlayers(1));
        assert_eq!(e.exit_code(), EXIT_ERROR);
        assert!(e.to_string().contains("at least 2 players"));

        let e = CliError::from(AiError::UnknownKind("oracle".into()));
        assert_eq!(e.exit_code(), EXIT_ERROR);
        assert!(e.to_string().contains("oracle"));
    }
}
