//! Application Layer
//!
//! Use cases that orchestrate a game session.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain game rules (those are in Domain)
//! - Wires player input and event sinks to the domain
//!
//! ## Use Cases
//!
//! - `GameSession` - Explore, list clues, accuse, tear down
//! - `describe_mansion` - Summary used by the `check` and `map` commands

pub mod inspect;
pub mod session;

pub use inspect::{describe_mansion, MansionSummary};
pub use session::{ExploreSummary, GameSession, ReleaseCounts, SessionOutcome};
