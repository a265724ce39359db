use detective_quest::DetectiveError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

fn fix_for(err: &DetectiveError) -> Option<&'static str> {
    match err {
        DetectiveError::Io(_) => Some("Check the path passed to --mansion or DETECTIVE_MANSION."),
        DetectiveError::InvalidMansionFile { .. } => {
            Some("Fix the TOML syntax; 'detective check --mansion FILE' validates it.")
        }
        DetectiveError::MissingEntrance => {
            Some("Remove 'parent' and 'side' from the room the player starts in.")
        }
        DetectiveError::MultipleEntrances { .. } => {
            Some("Give every room except the entrance a 'parent' and a 'side'.")
        }
        DetectiveError::DuplicateRoom { .. } => Some("Room names must be unique."),
        DetectiveError::UnknownParent { .. } => {
            Some("Point 'parent' at the exact name of a declared room.")
        }
        DetectiveError::SlotTaken { .. } => {
            Some("Each room holds at most one room on the left and one on the right.")
        }
        DetectiveError::IncompleteEdge { .. } => Some("Set both 'parent' and 'side', or neither."),
        DetectiveError::UnreachableRoom { .. } => {
            Some("Rooms must not form a cycle; every room needs a path from the entrance.")
        }
        DetectiveError::ZeroBuckets => Some("Set 'buckets' to 1 or more, or remove it."),
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut panel = Panel::with_title(format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    ))
    .style(PanelStyle::Error);

    for cause in err.chain().skip(1) {
        panel.add_line(format!("caused by: {}", cause));
    }

    if let Some(fix) = err.downcast_ref::<DetectiveError>().and_then(fix_for) {
        panel.add_empty();
        panel.add_line(format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            fix
        ));
    }

    panel.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "causes": causes,
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error_with(err, ui.color, ui.unicode));
}
