//! Command implementations.
//!
//! - [`manifest`] - write the route manifest
//! - [`inject`] - insert skip guards into browser tests
//! - [`append_helpers`] - append runtime helpers to the bootstrap file
//! - [`check`] - evaluate a skip predicate
//!
//! Each command exposes an `execute` function taking its parsed arguments
//! and the loaded configuration.

pub mod append_helpers;
pub mod check;
pub mod inject;
pub mod manifest;

pub use append_helpers::execute as append_helpers_execute;
pub use check::execute as check_execute;
pub use inject::execute as inject_execute;
pub use manifest::execute as manifest_execute;

use crate::config::SkipguardConfig;
use crate::error::{ConfigError, Result};
use skipguard::CommandRouter;

/// Router running the configured routes command.
pub(crate) fn command_router(config: &SkipguardConfig) -> Result<CommandRouter> {
    CommandRouter::from_command_line(config.routes_command.iter().cloned()).ok_or_else(|| {
        ConfigError::MissingField {
            field: "routes_command".to_string(),
            hint: "Provide the command that prints the route list as JSON".to_string(),
        }
        .into()
    })
}
