use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Clue,
    NoClue,
    Mansion,
    Check,
    Accuse,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Clue) => theme::icons::CLUE,
            (true, Icon::NoClue) => theme::icons::NO_CLUE,
            (true, Icon::Mansion) => theme::icons::MANSION,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Accuse) => theme::icons::ACCUSE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Clue) => theme::icons_ascii::CLUE,
            (false, Icon::NoClue) => theme::icons_ascii::NO_CLUE,
            (false, Icon::Mansion) => theme::icons_ascii::MANSION,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Accuse) => theme::icons_ascii::ACCUSE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Clue => theme::colors::WARNING,
            Icon::Arrow | Icon::NoClue => theme::colors::DIM,
            Icon::Mansion | Icon::Check | Icon::Accuse => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
