//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;
use skipguard::GuardError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Guard(e) => guard_error_to_miette(e),
        CliError::Config(e) => config_error_to_miette(e),
        CliError::PredicateFailed(reason) => miette::miette!("{}", reason),
    }
}

/// Convert GuardError to miette Report
pub fn guard_error_to_miette(err: GuardError) -> Report {
    match err {
        GuardError::RouteCommand { command, reason } => miette::miette!(
            "Route command `{}` failed: {}\n\nHint: Set routes_command in skipguard.toml if the application is not started with `php artisan`",
            command,
            reason
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    miette::miette!("Configuration error: {}", err)
}
