//! `skipguard inject [DIR]`

use crate::cli::InjectArgs;
use crate::config::SkipguardConfig;
use crate::error::Result;
use skipguard::SkipGuardInjector;
use tracing::info;

/// Rewrites every eligible test file under the directory.
///
/// `Updated: <path>` is printed as each file is written, so a failure
/// part-way still shows what was already changed.
pub fn execute(args: InjectArgs, config: &SkipguardConfig) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| config.test_dir.clone());
    let injector = SkipGuardInjector::new(config.injector_options());

    let report = injector.run(&dir, |path| println!("Updated: {}", path.display()))?;
    info!(
        scanned = report.files_scanned,
        updated = report.updated.len(),
        "injection complete"
    );

    println!("Done injecting skip checks");
    Ok(())
}
