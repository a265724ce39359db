use std::path::PathBuf;

use anyhow::Result;
use detective_quest::config::resolve_source;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::map::{render_legend, render_map};

pub fn cmd_map(mansion: Option<PathBuf>, reveal: bool, ui: &UiContext) -> Result<()> {
    let source = resolve_source(mansion);
    let (config, _) = super::load_mansion(&source, ui)?;
    let house = config.build_mansion()?;
    let suspects = config.build_suspects()?;

    if ui.json {
        let rooms: Vec<serde_json::Value> = house
            .entrance()
            .walk()
            .map(|step| {
                let mut room = serde_json::json!({
                    "name": step.room.name(),
                    "depth": step.depth,
                    "side": step.side,
                    "has_clue": step.room.clue().is_some(),
                });
                if reveal {
                    room["clue"] = serde_json::json!(step.room.clue());
                    room["suspect"] =
                        serde_json::json!(step.room.clue().and_then(|c| suspects.lookup(c)));
                }
                room
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "map",
            "title": house.title(),
            "rooms": rooms,
        }))?;
        return Ok(());
    }

    println!(
        "{} {}\n",
        Icon::Mansion.colored(ui.color, ui.unicode),
        house.title()
    );
    print!(
        "{}",
        render_map(&house, &suspects, reveal, ui.color, ui.unicode)
    );
    print!("{}", render_legend(reveal, ui.color, ui.unicode));
    Ok(())
}
