//! Text rendering of game events

use detective_quest::domain::ports::GameEvent;
use detective_quest::Accusation;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Render one event as terminal text; `None` when it is hidden at this verbosity.
pub fn render_event(event: &GameEvent, ui: &UiContext) -> Option<String> {
    let (color, unicode) = (ui.color, ui.unicode);
    let text = match event {
        GameEvent::Started {
            mansion,
            entrance,
            rooms,
            clues,
            suspects,
        } => {
            let title = paint(mansion, Tone::Info, true, color);
            format!(
                "{} {}\n{} rooms, {} clues, {} suspects. You start in the {}.\nCommands: e = left, d = right, v = back, s = exit\n",
                Icon::Mansion.colored(color, unicode),
                title,
                rooms,
                clues,
                suspects,
                entrance
            )
        }
        GameEvent::Entered { room } => {
            format!("\nYou are in: {}\n", paint(room, Tone::Plain, true, color))
        }
        GameEvent::ClueFound {
            clue, indexed, ..
        } => {
            let note = if *indexed { "" } else { " (already noted)" };
            format!(
                "{} Clue found: {}{}\n",
                Icon::Clue.colored(color, unicode),
                paint(clue, Tone::Warning, false, color),
                note
            )
        }
        GameEvent::AlreadyCollected { .. } => {
            format!("{}\n", paint("The clue here was already collected.", Tone::Dim, false, color))
        }
        GameEvent::NoClue { .. } => {
            format!("{}\n", paint("No clue in this room.", Tone::Dim, false, color))
        }
        GameEvent::Choices {
            left,
            right,
            can_go_back,
            ..
        } => {
            let mut line = format!(
                "  e: left ({})  d: right ({})",
                left.as_deref().unwrap_or("-"),
                right.as_deref().unwrap_or("-")
            );
            if *can_go_back {
                line.push_str("  v: back");
            }
            line.push_str("  s: exit\n");
            line
        }
        GameEvent::NoPath { room, direction } => format!(
            "{} There is no path to the {} of {}.\n",
            Icon::Warning.colored(color, unicode),
            direction,
            room
        ),
        GameEvent::AtEntrance { .. } => format!(
            "{} You are already at the entrance.\n",
            Icon::Warning.colored(color, unicode)
        ),
        GameEvent::InvalidCommand { input } => format!(
            "{} Invalid option '{}'. Use e, d, v or s.\n",
            Icon::Error.colored(color, unicode),
            input
        ),
        GameEvent::MalformedInput { reason } => format!(
            "{} Input ignored: {}\n",
            Icon::Warning.colored(color, unicode),
            reason
        ),
        GameEvent::Exited {
            rooms_entered,
            clues_collected,
        } => format!(
            "\nYou leave the mansion after {} room visit(s) with {} new clue(s).\n",
            rooms_entered, clues_collected
        ),
        GameEvent::CluesListed { clues } => render_clues(clues),
        GameEvent::SuspectsListed { suspects } => {
            if suspects.is_empty() {
                "\nNo suspects on record.\n".to_string()
            } else {
                format!("\nSuspects: {}\n", suspects.join(", "))
            }
        }
        GameEvent::Accused(accusation) => render_accusation(accusation, color, unicode),
        GameEvent::IndexStats {
            clues,
            depth,
            buckets,
            longest_chain,
        } => {
            if ui.verbose == 0 {
                return None;
            }
            format!(
                "{}\n",
                paint(
                    &format!(
                        "[index] {clues} clue(s), tree depth {depth}; suspect table {buckets} bucket(s), longest chain {longest_chain}"
                    ),
                    Tone::Dim,
                    false,
                    color
                )
            )
        }
        GameEvent::Released {
            rooms,
            clues,
            suspects,
        } => {
            if ui.verbose == 0 {
                return None;
            }
            format!(
                "{}\n",
                paint(
                    &format!(
                        "Released {rooms} room(s), {clues} clue node(s), {suspects} suspect entries"
                    ),
                    Tone::Dim,
                    false,
                    color
                )
            )
        }
    };
    Some(text)
}

fn render_clues(clues: &[String]) -> String {
    if clues.is_empty() {
        return "\nNo clues collected.\n".to_string();
    }
    let mut out = String::from("\nClues collected:\n");
    for clue in clues {
        out.push_str("- ");
        out.push_str(clue);
        out.push('\n');
    }
    out
}

pub fn render_accusation(accusation: &Accusation, color: bool, unicode: bool) -> String {
    let accused = if accusation.accused.is_empty() {
        "(nobody)"
    } else {
        accusation.accused.as_str()
    };

    let (style, verdict) = if accusation.verdict.is_correct() {
        (
            PanelStyle::Success,
            format!(
                "{} Correct: {} is the culprit.",
                Icon::Success.colored(color, unicode),
                accused
            ),
        )
    } else {
        (
            PanelStyle::Error,
            format!(
                "{} Not enough evidence against {}.",
                Icon::Error.colored(color, unicode),
                accused
            ),
        )
    };

    let mut panel = Panel::with_title(format!(
        "{} Accusation: {}",
        Icon::Accuse.colored(color, unicode),
        accused
    ))
    .style(style);
    panel.add_line(format!("Clues pointing to them: {}", accusation.count));
    for clue in &accusation.implicating {
        panel.add_line(format!("  - {clue}"));
    }
    panel.add_line(verdict);

    format!("\n{}", panel.render(color, unicode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use detective_quest::Verdict;

    fn plain(verbose: u8) -> UiContext {
        UiContext::from_caps(
            false,
            verbose,
            None,
            None,
            TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
        )
    }

    #[test]
    fn clue_listing_uses_dash_prefix() {
        let out = render_event(
            &GameEvent::CluesListed {
                clues: vec!["clue1".into(), "clue2".into()],
            },
            &plain(0),
        )
        .unwrap();
        assert_eq!(out, "\nClues collected:\n- clue1\n- clue2\n");
    }

    #[test]
    fn empty_listing_says_so() {
        let out = render_event(&GameEvent::CluesListed { clues: vec![] }, &plain(0)).unwrap();
        assert!(out.contains("No clues collected."));
    }

    #[test]
    fn diagnostics_hidden_unless_verbose() {
        let stats = GameEvent::Released {
            rooms: 3,
            clues: 2,
            suspects: 2,
        };
        assert!(render_event(&stats, &plain(0)).is_none());
        assert!(render_event(&stats, &plain(1))
            .unwrap()
            .contains("Released 3 room(s)"));
    }

    #[test]
    fn choices_mark_missing_passages() {
        let out = render_event(
            &GameEvent::Choices {
                room: "Study".into(),
                left: None,
                right: Some("Closet".into()),
                can_go_back: true,
            },
            &plain(0),
        )
        .unwrap();
        assert_eq!(out, "  e: left (-)  d: right (Closet)  v: back  s: exit\n");
    }

    #[test]
    fn accusation_panel_snapshot() {
        let accusation = Accusation {
            accused: "Ana".into(),
            count: 2,
            implicating: vec!["clue1".into(), "clue2".into()],
            verdict: Verdict::Correct,
        };
        let rendered = render_accusation(&accusation, false, false);
        insta::assert_snapshot!(rendered.trim_start_matches('\n'), @r"
        +-----------------------------------+
        | [ACCUSE] Accusation: Ana          |
        | Clues pointing to them: 2         |
        |   - clue1                         |
        |   - clue2                         |
        | [OK] Correct: Ana is the culprit. |
        +-----------------------------------+
        ");
    }

    #[test]
    fn blank_accusation_names_nobody() {
        let accusation = Accusation {
            accused: String::new(),
            count: 0,
            implicating: vec![],
            verdict: Verdict::Incorrect,
        };
        let out = render_accusation(&accusation, false, false);
        assert!(out.contains("Accusation: (nobody)"));
        assert!(out.contains("Not enough evidence against (nobody)."));
    }
}
