//! Game session use case
//!
//! A session owns the three structures of one game (mansion, clue index,
//! suspect table) and hands them by reference to the domain services.
//! Dropping a session at any point tears all three down.

use crate::config::MansionConfig;
use crate::domain::entities::{ClueIndex, Mansion, SuspectLookup};
use crate::domain::ports::{GameEvent, GameEventSink, InputLine, PlayerInput};
use crate::domain::services::{evaluate_accusation, Explorer, ExplorerState};
use crate::domain::value_objects::{Accusation, Command};
use crate::error::DetectiveResult;

/// Prompt shown before every room command
pub const COMMAND_PROMPT: &str = "Your choice: ";
/// Prompt shown before reading the accused name
pub const ACCUSE_PROMPT: &str = "Who is the culprit? ";

/// Read errors in a row after which input is treated as closed
const MAX_READ_FAILURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploreSummary {
    pub rooms_entered: usize,
    pub clues_collected: usize,
}

/// Nodes released by the end-of-session teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseCounts {
    pub rooms: usize,
    pub clues: usize,
    pub suspects: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub explore: ExploreSummary,
    pub clues: Vec<String>,
    pub accusation: Accusation,
    pub released: ReleaseCounts,
}

#[derive(Debug)]
pub struct GameSession {
    mansion: Mansion,
    clues: ClueIndex,
    suspects: SuspectLookup,
}

impl GameSession {
    pub fn new(mansion: Mansion, suspects: SuspectLookup) -> Self {
        Self {
            mansion,
            clues: ClueIndex::new(),
            suspects,
        }
    }

    pub fn from_config(config: &MansionConfig) -> DetectiveResult<Self> {
        Ok(Self::new(config.build_mansion()?, config.build_suspects()?))
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn suspects(&self) -> &SuspectLookup {
        &self.suspects
    }

    /// Full game: explore, list clues, accuse, tear down.
    pub fn play(
        mut self,
        input: &mut dyn PlayerInput,
        sink: &dyn GameEventSink,
    ) -> SessionOutcome {
        sink.on_event(GameEvent::Started {
            mansion: self.mansion.title().to_string(),
            entrance: self.mansion.entrance().name().to_string(),
            rooms: self.mansion.room_count(),
            clues: self.mansion.clue_count(),
            suspects: self.suspects.suspects().len(),
        });

        let explore = self.explore(input, sink);
        let clues = self.list_clues(sink);
        let accusation = self.accuse_interactively(input, sink);
        let released = self.release();
        sink.on_event(GameEvent::Released {
            rooms: released.rooms,
            clues: released.clues,
            suspects: released.suspects,
        });

        SessionOutcome {
            explore,
            clues,
            accusation,
            released,
        }
    }

    /// Walk the mansion until the player exits or input runs out.
    pub fn explore(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &dyn GameEventSink,
    ) -> ExploreSummary {
        let mut explorer = Explorer::enter(&mut self.mansion, &mut self.clues, sink);
        let mut failures = 0;

        while explorer.state() == ExplorerState::AtRoom {
            sink.on_event(explorer.choices());
            match input.read_line(COMMAND_PROMPT) {
                Ok(InputLine::Line(line)) => {
                    failures = 0;
                    match Command::parse(&line) {
                        Ok(command) => {
                            explorer.apply(command, sink);
                        }
                        Err(error) => explorer.reject(&error, sink),
                    }
                }
                Ok(InputLine::Garbled) => {
                    failures = 0;
                    sink.on_event(GameEvent::MalformedInput {
                        reason: "input is not valid text".to_string(),
                    });
                }
                Ok(InputLine::Closed) => explorer.leave(sink),
                Err(err) => {
                    failures += 1;
                    sink.on_event(GameEvent::MalformedInput {
                        reason: format!("could not read input: {err}"),
                    });
                    if failures >= MAX_READ_FAILURES {
                        explorer.leave(sink);
                    }
                }
            }
        }

        let summary = ExploreSummary {
            rooms_entered: explorer.rooms_entered(),
            clues_collected: explorer.clues_collected(),
        };
        drop(explorer);

        if sink.wants_diagnostics() {
            sink.on_event(GameEvent::IndexStats {
                clues: self.clues.len(),
                depth: self.clues.depth(),
                buckets: self.suspects.bucket_count(),
                longest_chain: self.suspects.longest_chain(),
            });
        }
        summary
    }

    /// Report collected clues in index order.
    pub fn list_clues(&self, sink: &dyn GameEventSink) -> Vec<String> {
        let clues: Vec<String> = self.clues.iter().map(str::to_string).collect();
        sink.on_event(GameEvent::CluesListed {
            clues: clues.clone(),
        });
        clues
    }

    /// Judge an accusation against the clues collected so far.
    pub fn accuse(&self, accused: &str) -> Accusation {
        evaluate_accusation(&self.clues, &self.suspects, accused)
    }

    /// List suspects, read a name, judge and report.
    pub fn accuse_interactively(
        &self,
        input: &mut dyn PlayerInput,
        sink: &dyn GameEventSink,
    ) -> Accusation {
        sink.on_event(GameEvent::SuspectsListed {
            suspects: self
                .suspects
                .suspects()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });

        let accused = read_accused(input, sink);
        let accusation = self.accuse(&accused);
        sink.on_event(GameEvent::Accused(accusation.clone()));
        accusation
    }

    /// Tear down all three structures.
    pub fn release(self) -> ReleaseCounts {
        ReleaseCounts {
            rooms: self.mansion.release(),
            clues: self.clues.release(),
            suspects: self.suspects.release(),
        }
    }
}

/// Read the accused name; end of input counts as accusing nobody.
fn read_accused(input: &mut dyn PlayerInput, sink: &dyn GameEventSink) -> String {
    let mut failures = 0;
    loop {
        match input.read_line(ACCUSE_PROMPT) {
            Ok(InputLine::Line(line)) => return line.trim().to_string(),
            Ok(InputLine::Closed) => return String::new(),
            Ok(InputLine::Garbled) => sink.on_event(GameEvent::MalformedInput {
                reason: "input is not valid text".to_string(),
            }),
            Err(err) => {
                failures += 1;
                sink.on_event(GameEvent::MalformedInput {
                    reason: format!("could not read input: {err}"),
                });
                if failures >= MAX_READ_FAILURES {
                    return String::new();
                }
            }
        }
    }
}
