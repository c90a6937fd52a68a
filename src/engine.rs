//! Game engine
//!
//! Draws the secret, evaluates guesses, and clears state. Every operation
//! reads through the [`StateStore`]; the engine keeps no copy of the secret.
//!
//! # Game Flow
//!
//! ```text
//! Uninitialized
//!     ↓ init_game
//! Active ──(too low / too high)──┐
//!     ↑__________________________┘
//!     ↓ correct guess, or clean_game_state
//! Solved-or-Cleared
//! ```
//!
//! A solved game only becomes active again through a fresh `init_game`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use strum::Display;
use thiserror::Error;
use tracing::{debug, info};

use crate::store::{StateStore, UNINITIALIZED};

/// Smallest valid secret and guess.
pub const MIN_SECRET: i32 = 1;

/// Largest valid secret and guess.
pub const MAX_SECRET: i32 = 100;

/// Sentinel emitted for a guess outside [`MIN_SECRET`, `MAX_SECRET`].
pub const CODE_OUT_OF_RANGE: i32 = -999;

/// Sentinel emitted when no game has been initialized.
pub const CODE_NOT_INITIALIZED: i32 = -998;

/// Comparison of a valid guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GuessOutcome {
    #[strum(serialize = "too low")]
    TooLow,
    #[strum(serialize = "correct")]
    Correct,
    #[strum(serialize = "too high")]
    TooHigh,
}

impl GuessOutcome {
    /// Integer code used on the command surface (-1, 0, 1).
    pub const fn code(self) -> i32 {
        match self {
            Self::TooLow => -1,
            Self::Correct => 0,
            Self::TooHigh => 1,
        }
    }
}

/// Reasons a guess cannot be compared.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("no game initialized")]
    NotInitialized,

    #[error("guess {0} is outside 1..=100")]
    OutOfRange(i32),
}

impl GuessError {
    /// Sentinel code used on the command surface.
    pub const fn code(self) -> i32 {
        match self {
            Self::NotInitialized => CODE_NOT_INITIALIZED,
            Self::OutOfRange(_) => CODE_OUT_OF_RANGE,
        }
    }
}

/// Result of [`Game::make_guess`].
pub type GuessResult = std::result::Result<GuessOutcome, GuessError>;

/// Flatten a guess result to the integer printed by the `guess` command.
pub fn guess_code(result: &GuessResult) -> i32 {
    match result {
        Ok(outcome) => outcome.code(),
        Err(e) => e.code(),
    }
}

/// Whether a secret is currently persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[strum(serialize = "uninitialized")]
    Uninitialized,
    #[strum(serialize = "active")]
    Active,
}

/// Number-guessing game bound to one state store.
#[derive(Debug, Clone)]
pub struct Game {
    store: StateStore,
}

impl Game {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Start a new game, overwriting any previous secret.
    ///
    /// The seed is the current Unix time in whole seconds, so two games
    /// started within the same second share a secret. Not suitable for
    /// anything that needs unpredictability.
    pub fn init_game(&self) -> i32 {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.init_game_with_seed(seed)
    }

    /// Start a new game from an explicit seed.
    pub fn init_game_with_seed(&self, seed: u64) -> i32 {
        let secret = draw_secret(seed);
        info!("Drew new secret from seed {}, saving to {}", seed, self.store.path().display());
        self.store.save(secret);
        secret
    }

    /// The persisted secret, or `0` if no game is active.
    pub fn get_secret_number(&self) -> i32 {
        self.store.load()
    }

    /// Compare `guess` to the persisted secret.
    ///
    /// Reads the store once. An uninitialized game takes precedence over a
    /// bad guess.
    pub fn make_guess(&self, guess: i32) -> GuessResult {
        let secret = self.store.load();
        if secret == UNINITIALIZED {
            return Err(GuessError::NotInitialized);
        }
        if !(MIN_SECRET..=MAX_SECRET).contains(&guess) {
            return Err(GuessError::OutOfRange(guess));
        }

        let outcome = match guess.cmp(&secret) {
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Equal => GuessOutcome::Correct,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
        };
        debug!("Guess {} is {}", guess, outcome);
        Ok(outcome)
    }

    /// Forget the current game.
    pub fn clean_game_state(&self) {
        self.store.clean();
        info!("Game state cleaned");
    }

    pub fn status(&self) -> GameStatus {
        if self.store.load() == UNINITIALIZED {
            GameStatus::Uninitialized
        } else {
            GameStatus::Active
        }
    }
}

// Modulo reduction keeps a slight bias toward the low end.
fn draw_secret(seed: u64) -> i32 {
    let mut rng = Pcg32::seed_from_u64(seed);
    let span = (MAX_SECRET - MIN_SECRET + 1) as u32;
    (rng.next_u32() % span) as i32 + MIN_SECRET
}
