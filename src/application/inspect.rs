//! Mansion inspection
//!
//! Cross-checks the room tree against the suspect table without playing.

use crate::config::MansionConfig;
use crate::domain::entities::ClueIndex;
use crate::domain::policies::ACCUSATION_THRESHOLD;
use crate::domain::services::{tally_by_suspect, SuspectTally};
use crate::error::DetectiveResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MansionSummary {
    pub title: String,
    pub entrance: String,
    pub rooms: usize,
    pub clues: usize,
    pub suspects: Vec<String>,
    /// Room clues no suspect entry mentions
    pub unassigned_clues: Vec<String>,
    /// Suspect entries whose clue is hidden in no room
    pub orphan_entries: Vec<String>,
    /// Tally if every clue in the mansion were collected
    pub full_tally: Vec<SuspectTally>,
}

impl MansionSummary {
    /// At least one suspect can be accused correctly.
    pub fn is_solvable(&self) -> bool {
        self.full_tally
            .first()
            .is_some_and(|top| top.clues >= ACCUSATION_THRESHOLD)
    }
}

/// Build the mansion and suspect table from `config` and summarize them.
pub fn describe_mansion(config: &MansionConfig) -> DetectiveResult<MansionSummary> {
    let mansion = config.build_mansion()?;
    let suspects = config.build_suspects()?;

    let room_clues: Vec<&str> = mansion
        .entrance()
        .walk()
        .filter_map(|step| step.room.clue())
        .collect();

    let unassigned_clues = room_clues
        .iter()
        .filter(|clue| suspects.lookup(clue).is_none())
        .map(|clue| clue.to_string())
        .collect();

    let orphan_entries = config
        .suspects
        .iter()
        .filter(|entry| !room_clues.contains(&entry.clue.as_str()))
        .map(|entry| entry.clue.clone())
        .collect();

    let everything: ClueIndex = room_clues.iter().copied().collect();
    let full_tally = tally_by_suspect(&everything, &suspects);

    Ok(MansionSummary {
        title: mansion.title().to_string(),
        entrance: mansion.entrance().name().to_string(),
        rooms: mansion.room_count(),
        clues: room_clues.len(),
        suspects: suspects.suspects().into_iter().map(str::to_string).collect(),
        unassigned_clues,
        orphan_entries,
        full_tally,
    })
}
