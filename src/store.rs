//! Persisted game state
//!
//! The secret number lives in a single text file holding its decimal
//! representation followed by a newline. The store never caches the value:
//! every `load` goes back to disk.
//!
//! # Failure Policy
//!
//! Callers never see a storage error. A failed write is logged and dropped,
//! and anything unreadable loads as [`UNINITIALIZED`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Value reported when no game is active.
pub const UNINITIALIZED: i32 = 0;

/// Default file name for the persisted secret.
pub const DEFAULT_STATE_FILE: &str = "game_state.txt";

/// File-backed holder of the secret number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Bind a store to the given backing file. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with `secret`.
    pub fn save(&self, secret: i32) {
        match fs::write(&self.path, format!("{secret}\n")) {
            Ok(()) => debug!("Saved game state to {}", self.path.display()),
            Err(e) => warn!("Failed to save game state to {}: {}", self.path.display(), e),
        }
    }

    /// Read the secret back, or [`UNINITIALIZED`] if the file is missing,
    /// empty, or does not start with an integer.
    pub fn load(&self) -> i32 {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return UNINITIALIZED,
            Err(e) => {
                warn!("Failed to read game state from {}: {}", self.path.display(), e);
                return UNINITIALIZED;
            }
        };

        parse_leading_int(&content).unwrap_or_else(|| {
            debug!("Game state at {} is not an integer", self.path.display());
            UNINITIALIZED
        })
    }

    /// Remove the backing file. A file that is already gone is not an error.
    pub fn clean(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed game state at {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove game state at {}: {}", self.path.display(), e),
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}

/// Parse the integer at the start of `input`.
///
/// Leading whitespace is skipped, then an optional sign and at least one
/// digit are consumed; anything after the digits is ignored. Returns `None`
/// when there are no digits or the value does not fit in an `i32`.
pub fn parse_leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}
