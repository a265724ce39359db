//! Player Input Port
//!
//! The only place a session blocks: waiting for the player to type a line.

use std::io;

/// One read from the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// A complete line, without the trailing newline
    Line(String),
    /// Bytes were read but they are not valid text; they have been discarded
    Garbled,
    /// The input stream is finished
    Closed,
}

/// Source of player input.
///
/// Implementations can be:
/// - `StdinInput`: Reads the terminal (or a pipe) line by line
/// - `ScriptedInput`: Replays a fixed list of lines (tests, demos)
pub trait PlayerInput {
    /// Show `prompt` (if the implementation displays prompts) and read one line.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputLine>;
}

impl<T: PlayerInput + ?Sized> PlayerInput for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputLine> {
        (**self).read_line(prompt)
    }
}
