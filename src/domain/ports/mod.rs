//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod game_events;
pub mod player_input;

pub use game_events::{GameEvent, GameEventSink, NoopEventSink};
pub use player_input::{InputLine, PlayerInput};

#[cfg(test)]
pub(crate) use game_events::testing;
