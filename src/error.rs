//! Error types for Detective Quest
//!
//! Uses `thiserror` for library errors. Everything here is fatal for the
//! session setup; recoverable player mistakes live in
//! [`CommandError`](crate::domain::value_objects::CommandError).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Detective Quest operations
pub type DetectiveResult<T> = Result<T, DetectiveError>;

/// Main error type for Detective Quest operations
#[derive(Error, Debug)]
pub enum DetectiveError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Mansion file could not be parsed
    #[error("invalid mansion file {file}: {message}")]
    InvalidMansionFile { file: PathBuf, message: String },

    /// Layout has no entrance room (every room names a parent)
    #[error("mansion has no entrance: exactly one room must omit 'parent'")]
    MissingEntrance,

    /// Layout has more than one room without a parent
    #[error("mansion has several entrances: '{first}' and '{second}'")]
    MultipleEntrances { first: String, second: String },

    /// Two rooms share the same name
    #[error("room '{name}' is declared more than once")]
    DuplicateRoom { name: String },

    /// An edge points at a parent that was never declared
    #[error("room '{room}' hangs off unknown parent '{parent}'")]
    UnknownParent { room: String, parent: String },

    /// Two rooms were attached to the same side of one parent
    #[error("the {side} side of '{parent}' is taken by both '{first}' and '{second}'")]
    SlotTaken {
        parent: String,
        side: String,
        first: String,
        second: String,
    },

    /// Room has a parent but no side (or vice versa)
    #[error("room '{room}' must set both 'parent' and 'side'")]
    IncompleteEdge { room: String },

    /// Room cannot be reached from the entrance
    #[error("room '{room}' cannot be reached from the entrance")]
    UnreachableRoom { room: String },

    /// Hash table needs at least one bucket
    #[error("suspect table needs at least one bucket")]
    ZeroBuckets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_parent() {
        let err = DetectiveError::UnknownParent {
            room: "Cellar".to_string(),
            parent: "Kitchn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "room 'Cellar' hangs off unknown parent 'Kitchn'"
        );
    }

    #[test]
    fn test_error_display_slot_taken() {
        let err = DetectiveError::SlotTaken {
            parent: "Hall".to_string(),
            side: "left".to_string(),
            first: "Study".to_string(),
            second: "Library".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the left side of 'Hall' is taken by both 'Study' and 'Library'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DetectiveError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
