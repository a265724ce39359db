//! Domain Entities
//!
//! Owned data structures that live for one game session.
//! - `Room` / `Mansion` - The fixed binary tree of rooms
//! - `ClueIndex` - Collected clues, kept in case-insensitive order
//! - `SuspectLookup` - Chained hash table from clue text to suspect

mod clue_index;
mod mansion;
mod room;
mod suspect_lookup;

pub use clue_index::{compare_clues, ClueIndex, InOrder};
pub use mansion::Mansion;
pub use room::{ClueState, Room, RoomWalk, WalkStep};
pub use suspect_lookup::{SuspectEntry, SuspectLookup, DEFAULT_BUCKET_COUNT};
