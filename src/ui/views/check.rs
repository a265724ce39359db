use detective_quest::application::MansionSummary;
use detective_quest::domain::policies::ACCUSATION_THRESHOLD;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

pub fn render_check_header(source: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\nSource: {}\n",
        Icon::Check.colored(supports_color, supports_unicode),
        paint("Detective Quest Check", Tone::Info, true, supports_color),
        source
    )
}

pub fn render_check_report(
    summary: &MansionSummary,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nTitle: {}\n", summary.title));
    out.push_str(&format!("Entrance: {}\n", summary.entrance));
    out.push_str(&format!("Rooms: {}\n", summary.rooms));
    out.push_str(&format!("Clues: {}\n", summary.clues));
    if summary.suspects.is_empty() {
        out.push_str("Suspects: none\n");
    } else {
        out.push_str(&format!("Suspects: {}\n", summary.suspects.join(", ")));
    }

    let warn = Icon::Warning.colored(supports_color, supports_unicode);
    for clue in &summary.unassigned_clues {
        out.push_str(&format!("{} Clue '{}' points to no suspect\n", warn, clue));
    }
    for clue in &summary.orphan_entries {
        out.push_str(&format!(
            "{} Suspect entry for '{}' matches no room\n",
            warn, clue
        ));
    }

    if verbose > 0 && !summary.full_tally.is_empty() {
        out.push_str("\nClues per suspect if every room is searched:\n");
        for tally in &summary.full_tally {
            out.push_str(&format!("  {}: {}\n", tally.suspect, tally.clues));
        }
    }

    out
}

pub fn render_check_summary(
    summary: &MansionSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if summary.is_solvable() {
        format!(
            "\n{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            paint("Mansion is solvable", Tone::Success, false, supports_color)
        )
    } else {
        format!(
            "\n{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            paint(
                &format!("No suspect can reach {ACCUSATION_THRESHOLD} clues"),
                Tone::Warning,
                false,
                supports_color
            )
        )
    }
}

pub fn summary_json(summary: &MansionSummary, warnings: usize) -> serde_json::Value {
    serde_json::json!({
        "event": "check",
        "title": summary.title,
        "entrance": summary.entrance,
        "rooms": summary.rooms,
        "clues": summary.clues,
        "suspects": summary.suspects,
        "unassigned_clues": summary.unassigned_clues,
        "orphan_entries": summary.orphan_entries,
        "tally": summary
            .full_tally
            .iter()
            .map(|t| serde_json::json!({ "suspect": t.suspect, "clues": t.clues }))
            .collect::<Vec<_>>(),
        "solvable": summary.is_solvable(),
        "warnings": warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use detective_quest::config::MansionConfig;
    use detective_quest::describe_mansion;

    #[test]
    fn builtin_report_snapshot() {
        let summary = describe_mansion(&MansionConfig::builtin().unwrap()).unwrap();
        let out = format!(
            "{}{}",
            render_check_report(&summary, 1, false, false),
            render_check_summary(&summary, false, false)
        );
        insta::assert_snapshot!(out.trim_start_matches('\n'), @r"
        Title: Detective Quest
        Entrance: Entrance Hall
        Rooms: 9
        Clues: 9
        Suspects: Ana, Beatriz, Carlos, Diego

        Clues per suspect if every room is searched:
          Carlos: 3
          Ana: 2
          Beatriz: 2
          Diego: 2

        [OK] Mansion is solvable
        ");
    }

    #[test]
    fn summary_json_flags_solvable() {
        let summary = describe_mansion(&MansionConfig::builtin().unwrap()).unwrap();
        let value = summary_json(&summary, 0);
        assert_eq!(value["event"], "check");
        assert_eq!(value["rooms"], 9);
        assert_eq!(value["solvable"], true);
        assert_eq!(value["tally"][0]["suspect"], "Carlos");
    }
}
