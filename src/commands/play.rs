use std::path::PathBuf;

use anyhow::Result;
use detective_quest::config::resolve_source;
use detective_quest::infrastructure::{stdin_input, JsonEventSink};
use detective_quest::GameSession;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

pub fn cmd_play(mansion: Option<PathBuf>, ui: &UiContext) -> Result<()> {
    let source = resolve_source(mansion);
    let (config, _) = super::load_mansion(&source, ui)?;
    let session = GameSession::from_config(&config)?;

    // Prompts would corrupt the NDJSON stream.
    let mut input = stdin_input(!ui.json);

    if ui.json {
        let sink = JsonEventSink::stdout().with_diagnostics(ui.verbose > 0);
        session.play(&mut input, &sink);
    } else {
        let sink = ConsoleEventSink::stdout(*ui);
        session.play(&mut input, &sink);
    }

    Ok(())
}
