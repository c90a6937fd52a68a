use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::store::parse_leading_int;

/// Environment variable that overrides the state file location.
pub const STATE_FILE_ENV: &str = "MYSTERY_STATE_FILE";

/// Mystery Number - guess the secret between 1 and 100
///
/// Without a command (or with one it does not recognise) the game starts
/// an interactive session.
#[derive(Parser, Debug)]
#[command(name = "mystery-number")]
#[command(about = "Guess the mystery number between 1 and 100")]
#[command(version)]
pub struct Cli {
    /// File that stores the secret number
    #[arg(long, global = true, env = STATE_FILE_ENV)]
    pub state_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Unrecognised words; any of them means an interactive session
    #[arg(hide = true)]
    pub unrecognised: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start a new game and print the secret
    Init {
        #[arg(hide = true, allow_negative_numbers = true)]
        extra: Vec<String>,
    },
    /// Submit a guess and print the result code
    Guess {
        /// Guessed number (anything non-numeric counts as 0)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,

        #[arg(hide = true, allow_negative_numbers = true)]
        extra: Vec<String>,
    },
    /// Print the secret, or 0 when no game is active
    Get {
        #[arg(hide = true, allow_negative_numbers = true)]
        extra: Vec<String>,
    },
    /// Remove the saved game
    Clean {
        #[arg(hide = true, allow_negative_numbers = true)]
        extra: Vec<String>,
    },
}

/// What the binary should do once arguments are understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Init,
    Guess(i32),
    Get,
    Clean,
    Interactive,
}

impl Cli {
    /// Parse process arguments. Help and version requests exit as usual.
    ///
    /// Unknown words and trailing extras are part of the grammar, so only
    /// malformed flags fail here; those still mean "play interactively",
    /// with the state file taken from the environment or the default.
    pub fn parse_args() -> Self {
        let args: Vec<OsString> = std::env::args_os().collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                tracing::debug!("Unrecognised arguments, falling back to interactive: {:?}", e.kind());
                let bin = args.into_iter().take(1);
                Self::try_parse_from(bin).unwrap_or_else(|e| e.exit())
            }
        }
    }

    pub fn action(&self) -> Action {
        match &self.command {
            Some(Commands::Init { .. }) => Action::Init,
            Some(Commands::Guess { value: Some(raw), .. }) => Action::Guess(atoi(raw)),
            Some(Commands::Get { .. }) => Action::Get,
            Some(Commands::Clean { .. }) => Action::Clean,
            Some(Commands::Guess { value: None, .. }) | None => Action::Interactive,
        }
    }
}

// Lenient like C atoi: unparsable input becomes 0.
fn atoi(raw: &str) -> i32 {
    parse_leading_int(raw).unwrap_or(0)
}
