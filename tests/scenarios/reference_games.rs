//! Scenario: The three reference games
//!
//! A: Hall("clue1") / Study("clue2") / empty Kitchen, walk left and exit.
//! B: Walk left into a leaf, then left again.
//! C: Accuse without collecting anything.

use detective_quest::domain::services::MansionBuilder;
use detective_quest::infrastructure::ScriptedInput;
use detective_quest::{
    ClueIndex, Direction, GameSession, NoopEventSink, SuspectLookup, Verdict,
};

fn reference_session() -> GameSession {
    let mut builder = MansionBuilder::new("Reference");
    builder
        .entrance("Hall", Some("clue1"))
        .room("Hall", Direction::Left, "Study", Some("clue2"))
        .room("Hall", Direction::Right, "Kitchen", Some(""));
    let mut suspects = SuspectLookup::new();
    suspects.register("clue1", "Ana");
    suspects.register("clue2", "Ana");
    GameSession::new(builder.build().unwrap(), suspects)
}

#[test]
fn scenario_a_left_and_exit() {
    let mut session = reference_session();
    let mut input = ScriptedInput::new(["e", "s"]);
    session.explore(&mut input, &NoopEventSink);

    assert_eq!(session.clues().list_in_order(), vec!["clue1", "clue2"]);

    let ana = session.accuse("Ana");
    assert_eq!((ana.count, ana.verdict), (2, Verdict::Correct));

    let carlos = session.accuse("Carlos");
    assert_eq!((carlos.count, carlos.verdict), (0, Verdict::Incorrect));
}

#[test]
fn scenario_b_left_twice_is_no_path() {
    let mut session = reference_session();
    let mut input = ScriptedInput::new(["e", "e", "s"]);
    let summary = session.explore(&mut input, &NoopEventSink);

    assert_eq!(summary.rooms_entered, 2);
    assert_eq!(summary.clues_collected, 2);
}

#[test]
fn scenario_c_empty_index_counts_zero() {
    let clues = ClueIndex::new();
    assert!(clues.list_in_order().is_empty());

    let mut suspects = SuspectLookup::new();
    suspects.register("clue1", "Ana");
    for accused in ["Ana", "ana", "", "Carlos"] {
        let accusation =
            detective_quest::domain::services::evaluate_accusation(&clues, &suspects, accused);
        assert_eq!(accusation.count, 0);
        assert_eq!(accusation.verdict, Verdict::Incorrect);
    }
}
