//! Detective Quest CLI
//!
//! Usage: detective [--json] [--color auto|always|never] [-v] [COMMAND]
//!
//! Commands:
//!   play   Explore the mansion and accuse a suspect (default)
//!   map    Print the room tree
//!   check  Validate a mansion file and summarize it

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use detective_quest::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    if let Err(err) = run(cli.command, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, ui: &UiContext) -> Result<()> {
    match command.unwrap_or(Commands::Play { mansion: None }) {
        Commands::Play { mansion } => commands::cmd_play(mansion, ui),
        Commands::Map { mansion, reveal } => commands::cmd_map(mansion, reveal, ui),
        Commands::Check { mansion } => commands::cmd_check(mansion, ui),
    }
}
