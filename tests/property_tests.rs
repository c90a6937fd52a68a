//! Property-Based Tests for Mystery Number
//!
//! These tests verify:
//! - Store save/load round-trips for every valid secret
//! - Sentinel codes for uninitialized games and out-of-range guesses
//! - Three-way comparison against a fixed secret

use mystery_number::engine::{CODE_NOT_INITIALIZED, CODE_OUT_OF_RANGE, MAX_SECRET, MIN_SECRET};
use mystery_number::{Game, StateStore, guess_code};
use proptest::prelude::*;
use tempfile::TempDir;

fn temp_game() -> (TempDir, Game) {
    let dir = TempDir::new().expect("Should create temp dir");
    let game = Game::new(StateStore::new(dir.path().join("state.txt")));
    (dir, game)
}

/// Strategy for guesses outside the playable range
fn out_of_range_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..MIN_SECRET, (MAX_SECRET + 1)..=i32::MAX]
}

// =============================================================================
// State Store
// =============================================================================

proptest! {
    /// load() immediately after save(s) returns s
    #[test]
    fn store_load_returns_saved(secret in MIN_SECRET..=MAX_SECRET) {
        let (_dir, game) = temp_game();
        game.store().save(secret);
        prop_assert_eq!(game.store().load(), secret);
    }
}

// =============================================================================
// Guess evaluation
// =============================================================================

proptest! {
    /// Uninitialized wins regardless of the guess
    #[test]
    fn uninitialized_always_reports_not_initialized(guess in any::<i32>()) {
        let (_dir, game) = temp_game();
        prop_assert_eq!(guess_code(&game.make_guess(guess)), CODE_NOT_INITIALIZED);
    }

    /// Out-of-range guesses are rejected even with an active game
    #[test]
    fn out_of_range_rejected(secret in MIN_SECRET..=MAX_SECRET, guess in out_of_range_strategy()) {
        let (_dir, game) = temp_game();
        game.store().save(secret);
        prop_assert_eq!(guess_code(&game.make_guess(guess)), CODE_OUT_OF_RANGE);
    }

    /// In-range guesses compare three ways against the secret
    #[test]
    fn comparison_matches_ordering(secret in MIN_SECRET..=MAX_SECRET, guess in MIN_SECRET..=MAX_SECRET) {
        let (_dir, game) = temp_game();
        game.store().save(secret);
        let expected = match guess.cmp(&secret) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        prop_assert_eq!(guess_code(&game.make_guess(guess)), expected);
    }

    /// Any seed draws a secret inside the range
    #[test]
    fn seeded_init_stays_in_range(seed in any::<u64>()) {
        let (_dir, game) = temp_game();
        let secret = game.init_game_with_seed(seed);
        prop_assert!((MIN_SECRET..=MAX_SECRET).contains(&secret));
        prop_assert_eq!(game.get_secret_number(), secret);
    }
}
