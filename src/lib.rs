//! Detective Quest - explore a mansion, collect clues, accuse the culprit
//!
//! The player walks a fixed binary tree of rooms. The first visit to a room
//! picks up its clue into an ordered index, and the final accusation is
//! judged by looking each collected clue up in a suspect table.
//!
//! ## Layers
//!
//! - `domain` - Rooms, clue index, suspect table, explorer and accusation rules
//! - `application` - Game session and mansion inspection use cases
//! - `infrastructure` - Player input readers and the NDJSON event sink
//! - `config` - Mansion files (TOML) and source resolution
//! - `presentation` - Command line definition

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{describe_mansion, GameSession, MansionSummary, SessionOutcome};
pub use config::{MansionConfig, MansionSource};
pub use domain::entities::{ClueIndex, Mansion, Room, SuspectLookup};
pub use domain::ports::{GameEvent, GameEventSink, NoopEventSink};
pub use domain::value_objects::{Accusation, Command, Direction, Verdict};
pub use error::{DetectiveError, DetectiveResult};
