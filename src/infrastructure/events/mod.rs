//! Event Sink Implementations
//!
//! Provides concrete implementations of GameEventSink:
//! - JsonEventSink: NDJSON output for scripting
//!
//! The themed console sink lives with the rest of the terminal UI in the binary.

mod json;

pub use json::JsonEventSink;
