use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the route manifest
    ///
    /// Enumerates the application's named routes with the configured routes
    /// command and writes them, with a timestamp and count, as JSON.
    Manifest(ManifestArgs),

    /// Insert skip guards into browser tests
    ///
    /// Scans every test under DIR for route and factory-state dependencies
    /// and inserts matching skip calls at the top of each test body.
    /// Running it twice duplicates the guards.
    Inject(InjectArgs),

    /// Append the runtime skip helpers to the test bootstrap file
    ///
    /// Does nothing when the helpers are already present.
    AppendHelpers(AppendHelpersArgs),

    /// Evaluate a skip predicate
    ///
    /// Exits 0 when the predicate holds and 1 otherwise.
    Check(CheckArgs),
}

/// Arguments for the manifest command
#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// Write the manifest here instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the inject command
#[derive(Args, Debug, Default)]
pub struct InjectArgs {
    /// Directory to scan (defaults to the configured test_dir)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for the append-helpers command
#[derive(Args, Debug, Default)]
pub struct AppendHelpersArgs {
    /// Bootstrap file to append to (defaults to the configured bootstrap_file)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Predicate to evaluate
    #[command(subcommand)]
    pub target: CheckTarget,
}

/// Predicates `check` can evaluate
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CheckTarget {
    /// Does a named route exist?
    Route {
        /// Route name, e.g. `dashboard`
        name: String,
    },

    /// Does a class declare a method?
    Method {
        /// Fully-qualified class name, e.g. `Database\Factories\UserFactory`
        class: String,
        /// Method name
        method: String,
    },

    /// Are all starter-kit routes registered?
    StarterKit,
}
