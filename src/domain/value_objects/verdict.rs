//! Outcome of an accusation

use serde::Serialize;

/// Whether the accusation holds up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Tally produced by the accusation evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accusation {
    /// Name as typed by the player (trimmed)
    pub accused: String,
    /// Number of collected clues pointing at the accused
    pub count: usize,
    /// Collected clues pointing at the accused, in index order
    pub implicating: Vec<String>,
    pub verdict: Verdict,
}
