//! Mystery Number - Main entry point
//!
//! Single commands print one line for a host application to read; anything
//! else starts an interactive session on the terminal.

use anyhow::{Context, Result};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mystery_number::cli::{Action, Cli};
use mystery_number::{Game, GameConfig, StateStore, guess_code, interactive};

/// Initialize the logger. Logs go to stderr so stdout stays machine-readable.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    let config = GameConfig::resolve(cli.config.as_deref(), cli.state_file.clone())
        .context("Failed to load configuration")?;
    info!("Using game state file {}", config.state_file.display());

    let game = Game::new(StateStore::new(config.state_file));

    match cli.action() {
        Action::Init => {
            // Report what was persisted, so a failed write shows up as 0
            game.init_game();
            println!("{}", game.get_secret_number());
        }
        Action::Guess(guess) => {
            println!("{}", guess_code(&game.make_guess(guess)));
        }
        Action::Get => {
            println!("{}", game.get_secret_number());
        }
        Action::Clean => {
            game.clean_game_state();
            println!("Game state cleaned");
        }
        Action::Interactive => {
            let session = interactive::run(&game, io::stdin().lock(), io::stdout().lock())
                .context("Interactive session failed")?;
            info!(
                "Session finished: solved={} attempts={}",
                session.solved, session.attempts
            );
        }
    }

    Ok(())
}
