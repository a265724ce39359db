//! Player commands typed at the room prompt
//!
//! One character per command, case-insensitive:
//! `e` walks left, `d` walks right, `v` goes back, `s` leaves the mansion.

use super::Direction;
use thiserror::Error;

/// A parsed room-prompt command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk through the left (`e`) or right (`d`) passage
    Go(Direction),
    /// Return to the previous room
    Back,
    /// Stop exploring and move on to the accusation
    Exit,
}

/// Why a line typed at the prompt is not a command.
///
/// Both cases are recoverable: the prompt is shown again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing but whitespace was typed
    #[error("empty input, type one letter")]
    Empty,

    /// Something was typed but it is not a known command
    #[error("invalid option '{0}', use 'e', 'd', 'v' or 's'")]
    Unknown(String),
}

impl Command {
    /// Letter that selects this command at the prompt
    pub fn key(&self) -> char {
        match self {
            Command::Go(Direction::Left) => 'e',
            Command::Go(Direction::Right) => 'd',
            Command::Back => 'v',
            Command::Exit => 's',
        }
    }

    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let input = line.trim();
        let mut chars = input.chars();
        let (Some(first), None) = (chars.next(), chars.next()) else {
            if input.is_empty() {
                return Err(CommandError::Empty);
            }
            return Err(CommandError::Unknown(input.to_string()));
        };

        match first.to_ascii_lowercase() {
            'e' => Ok(Command::Go(Direction::Left)),
            'd' => Ok(Command::Go(Direction::Right)),
            'v' => Ok(Command::Back),
            's' => Ok(Command::Exit),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }
}
