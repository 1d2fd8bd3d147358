//! Error types for the debate system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebateError {
    #[error("Debate topic must not be empty")]
    EmptyTopic,

    #[error("Invalid guest count: expected {expected}, got {actual}")]
    InvalidGuestCount { expected: usize, actual: usize },

    #[error("Invalid debate length: expected {min}-{max}, got {actual}")]
    InvalidLength { min: u8, max: u8, actual: u8 },

    #[error("Unknown perspective: {0}")]
    UnknownPerspective(String),

    #[error("Invalid template set: {0}")]
    InvalidTemplate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DebateError {
    /// True for errors the form layer should show as an input warning.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DebateError::EmptyTopic
                | DebateError::InvalidGuestCount { .. }
                | DebateError::InvalidLength { .. }
                | DebateError::UnknownPerspective(_)
        )
    }
}
