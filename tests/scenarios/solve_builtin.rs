//! Scenario: Solving the built-in mansion
//!
//! Journey: A player explores the classic mansion, backtracks, and accuses
//! the suspect with the most evidence.
//!
//! Success Criteria:
//! - Every room visited once yields its clue exactly once
//! - Backtracking never re-collects a clue
//! - Accusing Carlos after finding three of his clues is correct

use std::sync::Mutex;

use detective_quest::config::MansionConfig;
use detective_quest::infrastructure::ScriptedInput;
use detective_quest::{GameEvent, GameEventSink, GameSession, Verdict};

#[derive(Default)]
struct Transcript {
    events: Mutex<Vec<GameEvent>>,
}

impl GameEventSink for Transcript {
    fn on_event(&self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Transcript {
    fn clues_found(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                GameEvent::ClueFound { clue, .. } => Some(clue.clone()),
                _ => None,
            })
            .collect()
    }
}

/// SCENARIO: Full sweep of every room, then accuse Carlos
#[test]
fn scenario_sweep_every_room_and_convict_carlos() {
    let session = GameSession::from_config(&MansionConfig::builtin().unwrap()).unwrap();
    // Left wing, back, right wing down to the Study, back, Cellar and Secret Room.
    let mut input = ScriptedInput::new([
        "e", "e", "v", "d", "v", "v", "d", "d", "d", "v", "v", "e", "d", "s", "Carlos",
    ]);
    let transcript = Transcript::default();

    let outcome = session.play(&mut input, &transcript);

    assert_eq!(transcript.clues_found().len(), 9);
    assert_eq!(outcome.clues.len(), 9);
    assert_eq!(outcome.explore.clues_collected, 9);
    assert_eq!(outcome.accusation.count, 3);
    assert_eq!(outcome.accusation.verdict, Verdict::Correct);
    assert_eq!(
        outcome.accusation.implicating,
        vec![
            "Empty chemical flasks",
            "Golden key",
            "Knife with a broken handle"
        ]
    );
    assert_eq!(outcome.released.rooms, 9);
    assert_eq!(outcome.released.clues, 9);
    assert_eq!(outcome.released.suspects, 9);
    assert_eq!(input.remaining(), 0);
}

/// SCENARIO: Only two rooms visited, both pointing at Diego
#[test]
fn scenario_short_walk_is_enough_for_diego() {
    let session = GameSession::from_config(&MansionConfig::builtin().unwrap()).unwrap();
    let mut input = ScriptedInput::new(["e", "d", "s", "diego"]);
    let transcript = Transcript::default();

    let outcome = session.play(&mut input, &transcript);

    assert_eq!(
        transcript.clues_found(),
        vec![
            "Note signed with the letter A",
            "Muddy footprints",
            "Tire tracks"
        ]
    );
    assert_eq!(outcome.accusation.count, 2);
    assert!(outcome.accusation.verdict.is_correct());
}
