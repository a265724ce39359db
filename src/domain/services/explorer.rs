//! Exploration state machine
//!
//! ```text
//!            e / d / v (moved or refused)
//!              ┌──────────┐
//!              ▼          │
//! enter ──→ AtRoom ───────┘
//!              │
//!              └── s ──→ Exited
//! ```
//!
//! The explorer borrows the mansion and the clue index for the whole walk.
//! It never adds or removes rooms; it only flips a room's clue from pending
//! to collected, once.

use crate::domain::entities::{ClueIndex, Mansion, Room};
use crate::domain::ports::{GameEvent, GameEventSink};
use crate::domain::value_objects::{Command, CommandError, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    AtRoom,
    Exited,
}

pub struct Explorer<'s> {
    mansion: &'s mut Mansion,
    clues: &'s mut ClueIndex,
    /// Moves taken from the entrance to the current room
    path: Vec<Direction>,
    state: ExplorerState,
    rooms_entered: usize,
    clues_collected: usize,
}

impl<'s> Explorer<'s> {
    /// Step into the entrance, collecting its clue if it has one.
    pub fn enter(
        mansion: &'s mut Mansion,
        clues: &'s mut ClueIndex,
        sink: &dyn GameEventSink,
    ) -> Self {
        let mut explorer = Self {
            mansion,
            clues,
            path: Vec::new(),
            state: ExplorerState::AtRoom,
            rooms_entered: 0,
            clues_collected: 0,
        };
        explorer.arrive(sink);
        explorer
    }

    pub fn state(&self) -> ExplorerState {
        self.state
    }

    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn rooms_entered(&self) -> usize {
        self.rooms_entered
    }

    pub fn clues_collected(&self) -> usize {
        self.clues_collected
    }

    pub fn current(&self) -> &Room {
        let entrance = self.mansion.entrance();
        // `path` only ever records moves that succeeded.
        entrance.descend(&self.path).unwrap_or(entrance)
    }

    /// Event describing where the player can go from here.
    pub fn choices(&self) -> GameEvent {
        let room = self.current();
        GameEvent::Choices {
            room: room.name().to_string(),
            left: room.child(Direction::Left).map(|r| r.name().to_string()),
            right: room.child(Direction::Right).map(|r| r.name().to_string()),
            can_go_back: !self.path.is_empty(),
        }
    }

    /// Apply one command. Commands after exit are ignored.
    pub fn apply(&mut self, command: Command, sink: &dyn GameEventSink) -> ExplorerState {
        if self.state == ExplorerState::Exited {
            return self.state;
        }

        match command {
            Command::Go(direction) => {
                if self.current().child(direction).is_some() {
                    self.path.push(direction);
                    self.arrive(sink);
                } else {
                    sink.on_event(GameEvent::NoPath {
                        room: self.current().name().to_string(),
                        direction,
                    });
                }
            }
            Command::Back => {
                if self.path.pop().is_some() {
                    self.arrive(sink);
                } else {
                    sink.on_event(GameEvent::AtEntrance {
                        room: self.current().name().to_string(),
                    });
                }
            }
            Command::Exit => self.leave(sink),
        }
        self.state
    }

    /// Report a line that did not parse; the player stays put.
    pub fn reject(&self, error: &CommandError, sink: &dyn GameEventSink) {
        let event = match error {
            CommandError::Empty => GameEvent::MalformedInput {
                reason: error.to_string(),
            },
            CommandError::Unknown(input) => GameEvent::InvalidCommand {
                input: input.clone(),
            },
        };
        sink.on_event(event);
    }

    /// Stop exploring (explicit exit or end of input).
    pub fn leave(&mut self, sink: &dyn GameEventSink) {
        if self.state == ExplorerState::Exited {
            return;
        }
        self.state = ExplorerState::Exited;
        sink.on_event(GameEvent::Exited {
            rooms_entered: self.rooms_entered,
            clues_collected: self.clues_collected,
        });
    }

    fn arrive(&mut self, sink: &dyn GameEventSink) {
        self.rooms_entered += 1;

        if self.mansion.entrance().descend(&self.path).is_none() {
            self.path.clear();
        }
        let Some(room) = self.mansion.entrance_mut().descend_mut(&self.path) else {
            return;
        };
        let name = room.name().to_string();
        sink.on_event(GameEvent::Entered { room: name.clone() });

        let event = match room.collect().map(str::to_string) {
            Some(clue) => {
                let indexed = self.clues.insert(&clue);
                self.clues_collected += 1;
                GameEvent::ClueFound {
                    room: name,
                    clue,
                    indexed,
                }
            }
            None if room.is_collected() => GameEvent::AlreadyCollected { room: name },
            None => GameEvent::NoClue { room: name },
        };
        sink.on_event(event);
    }
}
