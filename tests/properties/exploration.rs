//! Property tests for exploring the built-in mansion with random input.

use proptest::prelude::*;

use detective_quest::config::MansionConfig;
use detective_quest::infrastructure::ScriptedInput;
use detective_quest::{GameSession, NoopEventSink};

fn command_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("e".to_string()),
        4 => Just("d".to_string()),
        3 => Just("v".to_string()),
        1 => Just("".to_string()),
        1 => "[a-z]{1,3}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: However the player wanders, each clue is collected at most once
    /// and the index only holds clues that exist in the mansion.
    #[test]
    fn property_clues_collected_at_most_once(
        lines in proptest::collection::vec(command_line(), 0..60)
    ) {
        let config = MansionConfig::builtin().unwrap();
        let all_clues: Vec<String> = config.rooms.iter().filter_map(|r| r.clue.clone()).collect();

        let mut session = GameSession::from_config(&config).unwrap();
        let mut input = ScriptedInput::new(lines);
        let summary = session.explore(&mut input, &NoopEventSink);

        let listed = session.clues().list_in_order();
        prop_assert_eq!(summary.clues_collected, listed.len());
        prop_assert!(listed.len() <= all_clues.len());
        for clue in listed {
            prop_assert!(all_clues.iter().any(|c| c == clue));
        }

        let released = session.release();
        prop_assert_eq!(released.rooms, 9);
        prop_assert_eq!(released.clues, summary.clues_collected);
    }

    /// PROPERTY: The verdict is correct exactly when the tally reaches two.
    #[test]
    fn property_verdict_follows_tally(
        lines in proptest::collection::vec(command_line(), 0..40),
        accused in prop_oneof![Just("Ana"), Just("Beatriz"), Just("Carlos"), Just("Diego"), Just("Nobody")],
    ) {
        let config = MansionConfig::builtin().unwrap();
        let mut session = GameSession::from_config(&config).unwrap();
        let mut input = ScriptedInput::new(lines);
        session.explore(&mut input, &NoopEventSink);

        let accusation = session.accuse(accused);
        prop_assert_eq!(accusation.verdict.is_correct(), accusation.count >= 2);
        prop_assert_eq!(accusation.count, accusation.implicating.len());
    }
}
