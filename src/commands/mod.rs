//! Subcommand handlers
//!
//! Each handler resolves the mansion source, loads it, and renders results
//! through the UI context (text or NDJSON).

mod check;
mod map;
mod play;

pub use check::cmd_check;
pub use map::cmd_map;
pub use play::cmd_play;

use anyhow::{Context, Result};
use detective_quest::config::{MansionConfig, MansionSource};

use crate::ui::context::UiContext;
use crate::ui::views::warnings::{render_config_warning, warning_json};

/// Load a resolved mansion source, reporting its warnings.
///
/// In text mode warnings go to stderr so the game transcript stays clean.
fn load_mansion(source: &MansionSource, ui: &UiContext) -> Result<(MansionConfig, usize)> {
    let (config, warnings) = source
        .load_with_warnings()
        .with_context(|| format!("failed to load {}", source.describe()))?;

    for warning in &warnings {
        if ui.json {
            crate::ui::json::emit(warning_json(warning))?;
        } else {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }

    Ok((config, warnings.len()))
}
