//! Mystery Number Library
//!
//! A number-guessing game whose secret is persisted between invocations,
//! usable from scripts via single commands or as an interactive session.

pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod interactive;
pub mod store;

// Re-export main types for convenience
pub use config_file::GameConfig;
pub use engine::{Game, GameStatus, GuessError, GuessOutcome, GuessResult, guess_code};
pub use error::GameError;
pub use interactive::Session;
pub use store::StateStore;
