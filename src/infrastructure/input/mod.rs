//! Player Input Implementations
//!
//! - LineInput: Reads lines from any `BufRead`, optionally echoing prompts
//! - ScriptedInput: Replays a fixed list of lines

mod line;
mod scripted;

pub use line::{stdin_input, LineInput, StdinInput};
pub use scripted::ScriptedInput;
