use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use detective_quest::presentation::ColorWhen;

/// Environment variable selecting color output (`auto|always|never`)
pub const COLOR_ENV: &str = "DETECTIVE_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        let caps = detect_capabilities();
        let env_color = std::env::var(COLOR_ENV)
            .ok()
            .and_then(|value| ColorWhen::from_env_value(&value));
        Self::from_caps(json, verbose, cli_color, env_color, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        env_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color.or(env_color) {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}
