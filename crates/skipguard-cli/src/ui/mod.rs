//! Terminal status messages.
//!
//! Decorated status lines go to stderr. Command results that scripts parse
//! are printed on stdout by the commands themselves and are not affected by
//! `--quiet`.
//!
//! # Examples
//!
//! ```no_run
//! use skipguard_cli::ui;
//!
//! ui::init(false, false);
//! ui::success("Helpers appended");
//! ui::warning("Route manifest is empty");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr() && !is_ci()
}

/// Decides once whether status messages are colored and whether they are
/// shown at all.
///
/// `no_color` comes from the `--no-color` flag and always wins over the
/// environment; `quiet` comes from `--quiet`.
pub fn init(no_color: bool, quiet: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

/// Whether stderr output (status lines and logs) may use ANSI colors.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn no_color_env_disables_colors() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn force_color_enables_colors() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        init(false, false);
        assert!(colors_enabled());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn flag_overrides_environment() {
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        init(true, false);
        assert!(!colors_enabled());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn quiet_flag_is_recorded() {
        init(true, true);
        assert!(is_quiet());
        init(true, false);
        assert!(!is_quiet());
    }
}
