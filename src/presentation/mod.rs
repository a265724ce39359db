//! Presentation Layer
//!
//! Command line definition (via clap). Rendering lives in the binary.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
