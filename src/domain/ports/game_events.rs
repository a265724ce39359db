//! Game Event Port
//!
//! Everything the player should see is reported as a [`GameEvent`].
//! Sinks decide how to show it: themed console text, NDJSON, or nothing.

use crate::domain::value_objects::{Accusation, Direction};

/// Event emitted during a game session
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Session set up and about to start at the entrance
    Started {
        mansion: String,
        entrance: String,
        rooms: usize,
        clues: usize,
        suspects: usize,
    },

    /// Player walked into a room
    Entered { room: String },

    /// Clue picked up for the first time
    ClueFound {
        room: String,
        clue: String,
        /// False when an equal clue (ignoring case) was already in the index
        indexed: bool,
    },

    /// Room revisited after its clue was taken
    AlreadyCollected { room: String },

    /// Room hides nothing
    NoClue { room: String },

    /// Passages available from the current room
    Choices {
        room: String,
        left: Option<String>,
        right: Option<String>,
        can_go_back: bool,
    },

    /// No passage on the chosen side
    NoPath { room: String, direction: Direction },

    /// "Back" typed while standing in the entrance
    AtEntrance { room: String },

    /// Line typed at the prompt is not a command
    InvalidCommand { input: String },

    /// Line could not be used at all (empty, unreadable)
    MalformedInput { reason: String },

    /// Player left the mansion
    Exited {
        rooms_entered: usize,
        clues_collected: usize,
    },

    /// Collected clues in index order
    CluesListed { clues: Vec<String> },

    /// Suspects the player can accuse
    SuspectsListed { suspects: Vec<String> },

    /// Accusation judged
    Accused(Accusation),

    /// Diagnostics about the in-memory structures (verbose only)
    IndexStats {
        clues: usize,
        depth: usize,
        buckets: usize,
        longest_chain: usize,
    },

    /// Structures torn down at session end
    Released {
        rooms: usize,
        clues: usize,
        suspects: usize,
    },
}

/// Trait for receiving game events
///
/// Implementations can be:
/// - ConsoleEventSink: Themed text in the terminal
/// - JsonEventSink: NDJSON event stream for scripting
/// - NoopEventSink: Silent operation
pub trait GameEventSink: Send + Sync {
    /// Handle a game event
    fn on_event(&self, event: GameEvent);

    /// Whether this sink wants diagnostic events such as [`GameEvent::IndexStats`]
    fn wants_diagnostics(&self) -> bool {
        false
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GameEventSink for NoopEventSink {
    fn on_event(&self, _event: GameEvent) {
        // Do nothing
    }
}
