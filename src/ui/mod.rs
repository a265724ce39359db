//! Terminal UI for the `detective` binary
//!
//! - `theme` / `primitives` / `widgets` - Design tokens and building blocks
//! - `views` - Rendering of game events, maps and check reports
//! - `console` - The text event sink
//! - `context` / `terminal` - Color and unicode decisions

pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
