//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command;
mod direction;
mod verdict;

pub use command::{Command, CommandError};
pub use direction::Direction;
pub use verdict::{Accusation, Verdict};
