//! `skipguard check <route|method|starter-kit>`
//!
//! Evaluates the same predicates the generated guards call at test time,
//! so a CI script can decide up front whether a suite applies.

use crate::cli::{CheckArgs, CheckTarget};
use crate::config::SkipguardConfig;
use crate::error::{CliError, Result};
use crate::ui;
use skipguard::{ManifestCache, SkipPredicates, Skipped, TestFramework};
use std::path::Path;
use tracing::debug;

/// Test framework stand-in for the shell: a skip becomes a failed check.
struct ShellFramework;

impl TestFramework for ShellFramework {
    fn mark_skipped(&self, reason: &str) {
        debug!(reason, "check failed");
    }
}

/// Evaluates one predicate; `Ok` when it holds.
pub fn execute(args: CheckArgs, config: &SkipguardConfig) -> Result<()> {
    let cache = ManifestCache::new(&config.manifest_path);
    let router = super::command_router(config)?;
    let reflection = config.reflection(Path::new("."));
    let framework = ShellFramework;
    let predicates = SkipPredicates::new(&cache, &router, &reflection, &framework);

    if cache.load().is_empty() {
        debug!(path = %cache.path().display(), "manifest empty, querying routes live");
    }

    let (outcome, subject) = match &args.target {
        CheckTarget::Route { name } => (predicates.skip_if_route_missing(name), format!("Route [{name}]")),
        CheckTarget::Method { class, method } => (
            predicates.skip_if_method_missing(class, method),
            format!("Method [{class}::{method}()]"),
        ),
        CheckTarget::StarterKit => (predicates.skip_if_not_starter_kit(), "Starter kit".to_string()),
    };

    match outcome {
        Ok(()) => {
            println!("yes");
            ui::success(&format!("{subject} available"));
            Ok(())
        }
        Err(Skipped { reason }) => {
            println!("no");
            Err(CliError::PredicateFailed(reason))
        }
    }
}
