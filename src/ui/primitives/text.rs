use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

/// Apply a semantic tone; plain text when color is off.
pub fn paint(text: &str, tone: Tone, bold: bool, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }

    let color = match tone {
        Tone::Plain => None,
        Tone::Success => Some(theme::colors::SUCCESS),
        Tone::Error => Some(theme::colors::ERROR),
        Tone::Warning => Some(theme::colors::WARNING),
        Tone::Info => Some(theme::colors::INFO),
        Tone::Dim => Some(theme::colors::DIM),
    };

    match (color, bold) {
        (None, false) => text.to_string(),
        (None, true) => format!("{}", text.bold()),
        (Some(color), false) => format!("{}", text.with(color)),
        (Some(color), true) => format!("{}", text.with(color).bold()),
    }
}
