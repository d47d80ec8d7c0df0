//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

/// Builds a status line, or `None` when `--quiet` suppresses it.
fn render(symbol: &str, message: &str, paint: impl Fn(&str) -> String) -> Option<String> {
    if is_quiet() {
        return None;
    }
    Some(if colors_enabled() {
        paint(symbol)
    } else {
        format!("{symbol} {message}")
    })
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if let Some(line) = render("✓", message, |s| format!("{} {}", s.green().bold(), message)) {
        eprintln!("{line}");
    }
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if let Some(line) = render("⚠", message, |s| {
        format!("{} {}", s.yellow().bold(), message.yellow())
    }) {
        eprintln!("{line}");
    }
}
