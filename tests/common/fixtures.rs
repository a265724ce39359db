//! Mansion files shared by tests.

/// Hall("clue1") with Study("clue2") on the left and an empty Kitchen on the right.
pub const SCENARIO_A: &str = r#"
title = "Scenario A"

[[rooms]]
name = "Hall"
clue = "clue1"

[[rooms]]
name = "Study"
clue = "clue2"
parent = "Hall"
side = "left"

[[rooms]]
name = "Kitchen"
clue = ""
parent = "Hall"
side = "right"

[[suspects]]
clue = "clue1"
suspect = "Ana"

[[suspects]]
clue = "clue2"
suspect = "Ana"
"#;

/// Hall and Study, with a misspelled key on line 9.
pub const SCENARIO_A_TYPO: &str = r#"
title = "Scenario A"

[[rooms]]
name = "Hall"
clue = "clue1"

[[rooms]]
nmae = "Study"
name = "Study"
clue = "clue2"
parent = "Hall"
side = "left"

[[suspects]]
clue = "clue1"
suspect = "Ana"
"#;

/// Two rooms fighting over the left side of the hall.
pub const SLOT_CLASH: &str = r#"
[[rooms]]
name = "Hall"

[[rooms]]
name = "Study"
parent = "Hall"
side = "left"

[[rooms]]
name = "Library"
parent = "Hall"
side = "left"
"#;
