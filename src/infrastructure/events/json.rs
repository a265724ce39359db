//! JSON Event Sink
//!
//! Outputs game events as NDJSON for scripting and bots.

use crate::domain::ports::{GameEvent, GameEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    diagnostics: bool,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            diagnostics: false,
        }
    }

    /// Also emit diagnostic events
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of one event
pub fn event_to_json(event: &GameEvent) -> serde_json::Value {
    match event {
        GameEvent::Started {
            mansion,
            entrance,
            rooms,
            clues,
            suspects,
        } => serde_json::json!({
            "event": "start",
            "mansion": mansion,
            "entrance": entrance,
            "rooms": rooms,
            "clues": clues,
            "suspects": suspects,
        }),

        GameEvent::Entered { room } => serde_json::json!({
            "event": "entered",
            "room": room,
        }),

        GameEvent::ClueFound {
            room,
            clue,
            indexed,
        } => serde_json::json!({
            "event": "clue_found",
            "room": room,
            "clue": clue,
            "indexed": indexed,
        }),

        GameEvent::AlreadyCollected { room } => serde_json::json!({
            "event": "already_collected",
            "room": room,
        }),

        GameEvent::NoClue { room } => serde_json::json!({
            "event": "no_clue",
            "room": room,
        }),

        GameEvent::Choices {
            room,
            left,
            right,
            can_go_back,
        } => serde_json::json!({
            "event": "choices",
            "room": room,
            "left": left,
            "right": right,
            "back": can_go_back,
        }),

        GameEvent::NoPath { room, direction } => serde_json::json!({
            "event": "no_path",
            "room": room,
            "direction": direction,
        }),

        GameEvent::AtEntrance { room } => serde_json::json!({
            "event": "at_entrance",
            "room": room,
        }),

        GameEvent::InvalidCommand { input } => serde_json::json!({
            "event": "invalid_command",
            "input": input,
        }),

        GameEvent::MalformedInput { reason } => serde_json::json!({
            "event": "malformed_input",
            "reason": reason,
        }),

        GameEvent::Exited {
            rooms_entered,
            clues_collected,
        } => serde_json::json!({
            "event": "exited",
            "rooms_entered": rooms_entered,
            "clues_collected": clues_collected,
        }),

        GameEvent::CluesListed { clues } => serde_json::json!({
            "event": "clues",
            "clues": clues,
        }),

        GameEvent::SuspectsListed { suspects } => serde_json::json!({
            "event": "suspects",
            "suspects": suspects,
        }),

        GameEvent::Accused(accusation) => serde_json::json!({
            "event": "accusation",
            "accused": accusation.accused,
            "count": accusation.count,
            "implicating": accusation.implicating,
            "verdict": accusation.verdict,
        }),

        GameEvent::IndexStats {
            clues,
            depth,
            buckets,
            longest_chain,
        } => serde_json::json!({
            "event": "index_stats",
            "clues": clues,
            "depth": depth,
            "buckets": buckets,
            "longest_chain": longest_chain,
        }),

        GameEvent::Released {
            rooms,
            clues,
            suspects,
        } => serde_json::json!({
            "event": "released",
            "rooms": rooms,
            "clues": clues,
            "suspects": suspects,
        }),
    }
}

impl GameEventSink for JsonEventSink {
    fn on_event(&self, event: GameEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_diagnostics(&self) -> bool {
        self.diagnostics
    }
}
