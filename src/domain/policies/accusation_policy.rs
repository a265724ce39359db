//! Accusation Policy
//!
//! An accusation holds when at least [`ACCUSATION_THRESHOLD`] collected clues
//! point at the accused. The threshold is fixed; it does not scale with the
//! number of clues in the mansion.

use crate::domain::value_objects::Verdict;

/// Independent clues needed to make an accusation stick
pub const ACCUSATION_THRESHOLD: usize = 2;

pub fn verdict_for(count: usize) -> Verdict {
    if count >= ACCUSATION_THRESHOLD {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Suspect names match ignoring surrounding whitespace and ASCII case.
pub fn names_match(suspect: &str, accused: &str) -> bool {
    let accused = accused.trim();
    !accused.is_empty() && suspect.trim().eq_ignore_ascii_case(accused)
}
