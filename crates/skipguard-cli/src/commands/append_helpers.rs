//! `skipguard append-helpers [FILE]`

use crate::cli::AppendHelpersArgs;
use crate::config::SkipguardConfig;
use crate::error::Result;
use crate::ui;
use skipguard::{AppendOutcome, HelperAppender};
use std::path::{Path, PathBuf};

/// Appends the runtime helpers to the bootstrap file once.
pub fn execute(args: AppendHelpersArgs, config: &SkipguardConfig) -> Result<()> {
    let bootstrap = args.file.unwrap_or_else(|| config.bootstrap_file.clone());
    let mut appender = HelperAppender::new(&bootstrap);

    match manifest_relative_to(&bootstrap, &config.manifest_path) {
        Some(relative) => appender = appender.manifest_path(relative),
        None => ui::warning(&format!(
            "{} is outside the directory of {}; helpers will read the default manifest location",
            config.manifest_path.display(),
            bootstrap.display()
        )),
    }

    let file = appender.bootstrap().display();
    match appender.append()? {
        AppendOutcome::Appended => println!("Helpers appended to {file}"),
        AppendOutcome::AlreadyApplied => println!("Helpers already appended to {file}, skipping"),
    }
    Ok(())
}

/// The manifest path as seen from the bootstrap file's directory.
fn manifest_relative_to(bootstrap: &Path, manifest: &Path) -> Option<PathBuf> {
    let base = bootstrap.parent().unwrap_or(Path::new(""));
    manifest.strip_prefix(base).ok().map(Path::to_path_buf)
}
