//! Error handling for the Skipguard CLI.
//!
//! Library failures arrive as [`GuardError`] and are shown verbatim, since
//! their messages ("Directory X does not exist", "X does not exist") are what
//! scripts around the tool look for. Everything the CLI adds on top
//! (configuration, failed `check` predicates) gets its own variant.
//!
//! # Example
//!
//! ```rust
//! use skipguard_cli::error::{CliError, Result};
//!
//! fn require_route(present: bool) -> Result<()> {
//!     if present {
//!         Ok(())
//!     } else {
//!         Err(CliError::PredicateFailed("Route login not found".into()))
//!     }
//! }
//!
//! assert!(require_route(false).is_err());
//! ```

mod miette;

use skipguard::GuardError;
use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest, injection or helper failures from the library.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// Configuration loading or validation failures.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A `check` predicate did not hold.
    #[error("{0}")]
    PredicateFailed(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file doesn't exist.
    #[error("Config file not found: {}\n\nHint: Create a skipguard.toml file or drop --config", .0.display())]
    NotFound(PathBuf),

    /// The merged configuration could not be deserialized.
    #[error("Invalid configuration: {0}\n\nHint: Check skipguard.toml syntax and SKIPGUARD_* variables")]
    Extract(String),

    /// A field that must not be empty was empty.
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
