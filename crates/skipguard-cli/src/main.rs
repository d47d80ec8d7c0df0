//! Skipguard CLI - keeps browser test suites runnable across app variants.
//!
//! Entry point: argument parsing, logging initialization and command
//! dispatch.

use clap::Parser;
use miette::Result;
use skipguard_cli::{cli, commands, config::SkipguardConfig, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Colors are decided once; logs follow the same decision.
    ui::init(args.no_color, args.quiet);
    logger::init_logger(args.verbose, args.quiet, !ui::colors_enabled());

    let result = SkipguardConfig::load(args.config.as_deref()).and_then(|config| match args.command {
        cli::Command::Manifest(manifest_args) => commands::manifest_execute(manifest_args, &config),
        cli::Command::Inject(inject_args) => commands::inject_execute(inject_args, &config),
        cli::Command::AppendHelpers(append_args) => {
            commands::append_helpers_execute(append_args, &config)
        }
        cli::Command::Check(check_args) => commands::check_execute(check_args, &config),
    });

    result.map_err(error::cli_error_to_miette)
}
