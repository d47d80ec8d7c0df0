//! `skipguard manifest`

use crate::cli::ManifestArgs;
use crate::config::SkipguardConfig;
use crate::error::Result;
use crate::ui;
use skipguard::RouteManifestBuilder;

/// Enumerates the named routes and writes the manifest.
pub fn execute(args: ManifestArgs, config: &SkipguardConfig) -> Result<()> {
    let router = super::command_router(config)?;
    let builder = RouteManifestBuilder::new(args.output.unwrap_or_else(|| config.manifest_path.clone()));

    let manifest = builder.generate(&router)?;
    if manifest.is_empty() {
        ui::warning("No named routes found; every route guard will fall back to live lookups");
    }

    println!(
        "Generated route manifest with {} routes at {}",
        manifest.route_count,
        builder.output().display()
    );
    Ok(())
}
