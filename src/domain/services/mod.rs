//! Domain Services
//!
//! Stateless logic plus the exploration state machine.
//! - `Explorer` - Walks the mansion and feeds the clue index
//! - `evaluate_accusation` - Tallies clues against an accused suspect
//! - `MansionBuilder` - Assembles a room tree from (parent, side, room) edges

mod accusation;
mod explorer;
mod mansion_builder;

pub use accusation::{evaluate_accusation, tally_by_suspect, SuspectTally};
pub use explorer::{Explorer, ExplorerState};
pub use mansion_builder::MansionBuilder;
