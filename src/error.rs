//! Error handling module for the game
//!
//! Provides the crate error type using thiserror. Guess evaluation has its
//! own narrow error type in [`crate::engine::GuessError`]; this one covers
//! configuration and terminal I/O.

use thiserror::Error;

/// Main error type for mystery-number
#[derive(Error, Debug)]
pub enum GameError {
    /// IO errors (terminal reads and writes, config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
