//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `skipguard manifest` - write the route manifest
//! - `skipguard inject [DIR]` - insert skip guards into browser tests
//! - `skipguard append-helpers` - append runtime helpers to the bootstrap file
//! - `skipguard check <route|method|starter-kit>` - evaluate one predicate

mod commands;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{AppendHelpersArgs, CheckArgs, CheckTarget, Command, InjectArgs, ManifestArgs};

/// Skipguard - skip browser tests whose routes or factory states are missing
#[derive(Parser, Debug)]
#[command(
    name = "skipguard",
    version,
    about = "Skip browser tests whose routes or factory states are missing",
    long_about = "Skipguard snapshots an application's named routes, scans browser tests for\n\
                  the routes and factory states they depend on, and inserts guards that skip\n\
                  a test when the application variant it runs against lacks them."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./skipguard.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
