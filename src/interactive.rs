//! Interactive text session.
//!
//! Starts a fresh game, then reads one guess per line until the secret is
//! found or input runs out. Reader and writer are generic so sessions can be
//! scripted in tests.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::engine::{Game, GuessError, GuessOutcome, MAX_SECRET, MIN_SECRET};
use crate::error::Result;
use crate::store::parse_leading_int;

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    /// Guesses that were in range and compared against the secret
    pub attempts: u32,
    /// Whether the session ended on the correct number
    pub solved: bool,
}

/// Run a session against `game`, reading guesses from `input`.
pub fn run<R: BufRead, W: Write>(game: &Game, mut input: R, mut output: W) -> Result<Session> {
    game.init_game();

    writeln!(output, "=== Mystery Number ===")?;
    writeln!(
        output,
        "I picked a number between {MIN_SECRET} and {MAX_SECRET}. Try to guess it!\n"
    )?;

    let mut session = Session::default();
    let mut line = String::new();
    loop {
        writeln!(output, "Pick a number between {MIN_SECRET} and {MAX_SECRET}:")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed after {} attempts", session.attempts);
            break;
        }

        let Some(guess) = parse_leading_int(&line) else {
            debug!("Ignoring non-numeric input {:?}", line.trim_end());
            writeln!(output, "Please enter a whole number.")?;
            continue;
        };

        let outcome = match game.make_guess(guess) {
            Ok(outcome) => outcome,
            Err(GuessError::OutOfRange(_)) => {
                writeln!(
                    output,
                    "Error, the number must be between {MIN_SECRET} and {MAX_SECRET}."
                )?;
                continue;
            }
            Err(GuessError::NotInitialized) => {
                warn!("Game state disappeared during the session");
                writeln!(output, "The game is no longer running.")?;
                break;
            }
        };

        session.attempts += 1;
        writeln!(output, "You picked {guess}.")?;
        match outcome {
            GuessOutcome::TooLow => writeln!(output, "The number is too small.")?,
            GuessOutcome::TooHigh => writeln!(output, "The number is too big.")?,
            GuessOutcome::Correct => {
                writeln!(
                    output,
                    "Well done, you found the number {}.",
                    game.get_secret_number()
                )?;
                session.solved = true;
                break;
            }
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StateStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn temp_game() -> (TempDir, Game) {
        let dir = TempDir::new().expect("Should create temp dir");
        let game = Game::new(StateStore::new(dir.path().join("state.txt")));
        (dir, game)
    }

    /// Feeds every number from 1 to 100 in order; one of them must hit.
    #[test]
    fn test_linear_search_always_wins() {
        let (_dir, game) = temp_game();
        let script: String = (1..=100).map(|n| format!("{n}\n")).collect();
        let mut out = Vec::new();

        let session = run(&game, Cursor::new(script), &mut out).expect("Session should run");
        let text = String::from_utf8(out).expect("Output should be UTF-8");
        let secret = game.get_secret_number();

        assert!(session.solved);
        assert_eq!(session.attempts, secret as u32);
        assert!(text.starts_with("=== Mystery Number ==="));
        assert!(text.contains(&format!("Well done, you found the number {secret}.")));
    }

    #[test]
    fn test_out_of_range_is_rejected_and_not_counted() {
        let (_dir, game) = temp_game();
        let mut out = Vec::new();

        let session = run(&game, Cursor::new("0\n101\n"), &mut out).expect("Session should run");
        let text = String::from_utf8(out).expect("Output should be UTF-8");

        assert_eq!(session, Session { attempts: 0, solved: false });
        assert_eq!(
            text.matches("Error, the number must be between 1 and 100.").count(),
            2
        );
        assert!(!text.contains("You picked"));
    }

    #[test]
    fn test_non_numeric_input_reprompts() {
        let (_dir, game) = temp_game();
        let mut out = Vec::new();

        run(&game, Cursor::new("hello\n"), &mut out).expect("Session should run");
        let text = String::from_utf8(out).expect("Output should be UTF-8");

        assert!(text.contains("Please enter a whole number."));
        assert_eq!(text.matches("Pick a number between 1 and 100:").count(), 2);
    }

    #[test]
    fn test_hints_point_toward_secret() {
        let (_dir, game) = temp_game();
        let mut out = Vec::new();

        // 1 and 100 are never both correct, so at least one hint is printed
        let session = run(&game, Cursor::new("1\n100\n"), &mut out).expect("Session should run");
        let text = String::from_utf8(out).expect("Output should be UTF-8");
        let secret = game.get_secret_number();

        if secret != 1 {
            assert!(text.contains("You picked 1.\nThe number is too small."));
        }
        if secret != 100 && secret != 1 {
            assert!(text.contains("You picked 100.\nThe number is too big."));
        }
        assert!(session.attempts >= 1);
    }

    #[test]
    fn test_lost_state_ends_session() {
        let (dir, _game) = temp_game();
        let game = Game::new(StateStore::new(dir.path().join("missing").join("state.txt")));
        let mut out = Vec::new();

        let session = run(&game, Cursor::new("50\n50\n"), &mut out).expect("Session should run");
        let text = String::from_utf8(out).expect("Output should be UTF-8");

        assert_eq!(session, Session { attempts: 0, solved: false });
        assert!(text.ends_with("The game is no longer running.\n"));
        assert_eq!(text.matches("Pick a number between 1 and 100:").count(), 1);
        assert!(!text.contains("You picked"));
    }

    #[test]
    fn test_empty_input_ends_session() {
        let (_dir, game) = temp_game();
        let session = run(&game, Cursor::new(""), Vec::new()).expect("Session should run");
        assert_eq!(session, Session::default());
        assert_ne!(game.get_secret_number(), 0);
    }
}
