//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `input/` - Player input (line reader over stdin, scripted input)
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod input;

// Re-export for convenience
pub use events::JsonEventSink;
pub use input::{stdin_input, LineInput, ScriptedInput, StdinInput};
