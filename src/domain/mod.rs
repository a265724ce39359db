//! Domain Layer
//!
//! The core of Detective Quest: the mansion, the clue index, the suspect
//! table and the rules that tie them together. Nothing here touches stdin,
//! stdout or the file system.
//!
//! ## Structure
//!
//! - `entities/` - Owned data structures (Room, ClueIndex, SuspectLookup)
//! - `value_objects/` - Small immutable values (Direction, Command, Verdict)
//! - `services/` - Exploration state machine, accusation tally, layout builder
//! - `policies/` - Fixed game rules
//! - `ports/` - Interfaces for input and event reporting

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
