//! Configuration module for Detective Quest
//!
//! Which mansion to play is resolved in this order:
//! 1. CLI flag (`--mansion <FILE>`)
//! 2. Environment variable (`DETECTIVE_MANSION`)
//! 3. The built-in mansion
//!
//! Mansion files are TOML; unknown keys are reported as warnings, not errors.

mod loader;
mod types;

pub use loader::{
    load_with_warnings, parse_with_warnings, resolve_source, resolve_source_with,
    ConfigWarning, MansionSource, MANSION_ENV,
};
pub use types::{MansionConfig, RoomConfig, SuspectConfig};
