//! Logging setup for the Skipguard CLI.
//!
//! The library crates log through `tracing`: per-file and per-test decisions
//! at debug, batch summaries at info. This module installs the subscriber
//! that decides what reaches stderr.
//!
//! The contractual output lines (`Updated: ...`, `Done injecting skip
//! checks`, ...) are printed on stdout and are not affected by the level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "skipguard=debug,skipguard_cli=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "skipguard=error,skipguard_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "skipguard=warn,skipguard_cli=warn";

/// Picks the filter directives for the given flags.
///
/// `--verbose` wins over `--quiet`; without either, `RUST_LOG` is consulted
/// before falling back to [`DEFAULT_FILTER`].
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program. Logs go to stderr so stdout stays
/// reserved for command output.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn verbose_enables_debug() {
        assert_eq!(build_filter(true, false).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(build_filter(true, true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn quiet_only_shows_errors() {
        assert_eq!(build_filter(false, true).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    #[serial]
    fn rust_log_is_respected() {
        unsafe { std::env::set_var("RUST_LOG", "skipguard=trace") };
        let filter = build_filter(false, false);
        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    #[serial]
    fn default_without_rust_log() {
        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(build_filter(false, false).max_level_hint(), Some(LevelFilter::WARN));
    }
}
