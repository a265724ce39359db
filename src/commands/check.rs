use std::path::PathBuf;

use anyhow::Result;
use detective_quest::config::resolve_source;
use detective_quest::describe_mansion;

use crate::ui::context::UiContext;
use crate::ui::views::check::{
    render_check_header, render_check_report, render_check_summary, summary_json,
};

pub fn cmd_check(mansion: Option<PathBuf>, ui: &UiContext) -> Result<()> {
    let source = resolve_source(mansion);
    if !ui.json {
        print!(
            "{}",
            render_check_header(&source.describe(), ui.color, ui.unicode)
        );
    }

    let (config, warnings) = super::load_mansion(&source, ui)?;
    let summary = describe_mansion(&config)?;

    if ui.json {
        crate::ui::json::emit(summary_json(&summary, warnings))?;
        return Ok(());
    }

    print!(
        "{}",
        render_check_report(&summary, ui.verbose, ui.color, ui.unicode)
    );
    print!(
        "{}",
        render_check_summary(&summary, ui.color, ui.unicode)
    );
    Ok(())
}
