use detective_quest::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown key '{}' in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out.push('\n');
    out
}

pub fn warning_json(warning: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}
