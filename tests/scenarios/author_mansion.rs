//! Scenario: Authoring a custom mansion
//!
//! Journey: A player writes their own mansion file, checks it, maps it, and
//! plays it through the environment variable.
//!
//! Steps:
//! 1. Write a mansion with a typo and a missing suspect
//! 2. `detective check` points out both
//! 3. Fix the file; `check` reports it solvable
//! 4. `detective map` shows the layout
//! 5. Play it via DETECTIVE_MANSION

use crate::common::*;

const DRAFT: &str = r#"
title = "Lighthouse"

[[rooms]]
name = "Door"
clue = "Wet boots"

[[rooms]]
name = "Stairs"
clue = "Torn rope"
parent = "Door"
sid = "left"

[[suspects]]
clue = "Wet boots"
suspect = "Keeper"
"#;

const FIXED: &str = r#"
title = "Lighthouse"

[[rooms]]
name = "Door"
clue = "Wet boots"

[[rooms]]
name = "Stairs"
clue = "Torn rope"
parent = "Door"
side = "left"

[[rooms]]
name = "Lamp Room"
clue = "Broken lens"
parent = "Stairs"
side = "right"

[[suspects]]
clue = "Wet boots"
suspect = "Keeper"

[[suspects]]
clue = "Torn rope"
suspect = "Keeper"

[[suspects]]
clue = "Broken lens"
suspect = "Sailor"
"#;

#[test]
fn scenario_author_check_map_and_play() {
    let env = TestEnv::new();

    // Steps 1-2: the typo leaves Stairs with a parent but no side.
    let draft = env.write_file("lighthouse.toml", DRAFT);
    let result = env.run(&["check", "--mansion", draft.to_str().unwrap()], "");
    assert!(!result.success, "draft should fail:\n{}", result.stdout);
    assert!(result.stderr.contains("Unknown key 'sid'"));
    assert!(result.stderr.contains("did you mean 'side'?"));
    assert!(result
        .stderr
        .contains("room 'Stairs' must set both 'parent' and 'side'"));

    // Step 3
    let fixed = env.write_file("lighthouse.toml", FIXED);
    let result = env.run(&["check", "--mansion", fixed.to_str().unwrap()], "");
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Rooms: 3"));
    assert!(result.stdout.contains("Suspects: Keeper, Sailor"));
    assert!(result.stdout.contains("Mansion is solvable"));

    // Step 4
    let result = env.run(&["map", "--mansion", fixed.to_str().unwrap()], "");
    assert!(result.stdout.contains("`-- L: Stairs [*]"));
    assert!(result.stdout.contains("    `-- R: Lamp Room [*]"));

    // Step 5
    let result = env.run_with_env(
        &[],
        "e\nd\nv\nv\ns\nkeeper\n",
        &[("DETECTIVE_MANSION", fixed.to_str().unwrap())],
    );
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result
        .stdout
        .contains("Clues collected:\n- Broken lens\n- Torn rope\n- Wet boots\n"));
    assert!(result.stdout.contains("Correct: keeper is the culprit."));
}
