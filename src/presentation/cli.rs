//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand starts a game, like `detective play`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Parse a `DETECTIVE_COLOR` value; unknown values are ignored.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorWhen::Auto),
            "always" => Some(ColorWhen::Always),
            "never" => Some(ColorWhen::Never),
            _ => None,
        }
    }
}

/// Detective Quest - explore the mansion, collect clues, accuse the culprit
#[derive(Parser, Debug)]
#[command(name = "detective")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'detective' without arguments to play the built-in mansion.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows index diagnostics and teardown counts)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Explore the mansion and accuse a suspect
    Play {
        /// Mansion file (TOML); defaults to $DETECTIVE_MANSION, then the built-in mansion
        #[arg(short, long, value_name = "FILE")]
        mansion: Option<PathBuf>,
    },

    /// Print the room tree
    Map {
        /// Mansion file (TOML)
        #[arg(short, long, value_name = "FILE")]
        mansion: Option<PathBuf>,

        /// Show clue text and suspects instead of markers
        #[arg(long)]
        reveal: bool,
    },

    /// Validate a mansion file and summarize it
    Check {
        /// Mansion file (TOML)
        #[arg(short, long, value_name = "FILE")]
        mansion: Option<PathBuf>,
    },
}

impl Commands {
    pub fn mansion(&self) -> Option<&PathBuf> {
        match self {
            Commands::Play { mansion }
            | Commands::Map { mansion, .. }
            | Commands::Check { mansion } => mansion.as_ref(),
        }
    }
}
