//! Skipguard CLI.
//!
//! Command-line front end for the `skipguard` library:
//!
//! - `skipguard manifest` - snapshot the application's named routes
//! - `skipguard inject [DIR]` - insert skip guards into browser tests
//! - `skipguard append-helpers` - add the runtime helpers to the test bootstrap
//! - `skipguard check ...` - evaluate a skip predicate from the shell
//!
//! # Modules
//!
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status messages
//! - [`config`] - layered configuration (defaults, `skipguard.toml`, env)
//!
//! # Example
//!
//! ```rust
//! use skipguard_cli::{config::SkipguardConfig, error::Result};
//!
//! fn main() -> Result<()> {
//!     let config = SkipguardConfig::default();
//!     assert_eq!(config.extension, "php");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
