//! Accusation evaluator
//!
//! Walks the clue index in order (explicit stack, see
//! [`ClueIndex::iter`]), looks every clue up in the suspect table and counts
//! the ones that point at the accused.

use crate::domain::entities::{compare_clues, ClueIndex, SuspectLookup};
use crate::domain::policies::{names_match, verdict_for};
use crate::domain::value_objects::Accusation;

/// Judge an accusation against the collected clues.
pub fn evaluate_accusation(
    clues: &ClueIndex,
    suspects: &SuspectLookup,
    accused: &str,
) -> Accusation {
    let implicating: Vec<String> = clues
        .iter()
        .filter(|clue| {
            suspects
                .lookup(clue)
                .is_some_and(|suspect| names_match(suspect, accused))
        })
        .map(str::to_string)
        .collect();

    let count = implicating.len();
    Accusation {
        accused: accused.trim().to_string(),
        count,
        implicating,
        verdict: verdict_for(count),
    }
}

/// Collected clues per suspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectTally {
    pub suspect: String,
    pub clues: usize,
}

/// Count collected clues per suspect, most implicated first.
///
/// Suspect names are folded case-insensitively; the first spelling seen wins.
/// Clues with no registered suspect are skipped.
pub fn tally_by_suspect(clues: &ClueIndex, suspects: &SuspectLookup) -> Vec<SuspectTally> {
    let mut tallies: Vec<SuspectTally> = Vec::new();
    for suspect in clues.iter().filter_map(|clue| suspects.lookup(clue)) {
        match tallies
            .iter_mut()
            .find(|tally| tally.suspect.eq_ignore_ascii_case(suspect))
        {
            Some(tally) => tally.clues += 1,
            None => tallies.push(SuspectTally {
                suspect: suspect.to_string(),
                clues: 1,
            }),
        }
    }
    tallies.sort_by(|a, b| {
        b.clues
            .cmp(&a.clues)
            .then_with(|| compare_clues(&a.suspect, &b.suspect))
    });
    tallies
}
