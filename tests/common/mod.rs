//! Common test utilities for CLI, property and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Temp directory plus helpers to run `detective` with piped stdin
//! - Fixtures: Small mansion files

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
