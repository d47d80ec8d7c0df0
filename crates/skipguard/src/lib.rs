//! # skipguard
//!
//! Keeps a browser test suite runnable across application variants that may
//! lack some named routes or factory states.
//!
//! ## Pieces
//!
//! - [`manifest`]: snapshot of the application's named routes, written to
//!   JSON before a test run
//! - [`cache`]: load-once, process-wide access to that snapshot
//! - [`predicates`]: `route_exists`, `skip_if_route_missing` and friends
//! - [`extract`] / [`scan`]: brace-counting body extraction and allow-list
//!   dependency detection over test source
//! - [`inject`]: batch rewrite inserting skip guards into test files
//! - [`helpers`]: one-time append of the runtime helper functions to the
//!   test bootstrap
//!
//! ## Example
//!
//! ```
//! use skipguard::inject::inject_source;
//!
//! let source = "test('home', function () {\n    visit(route('home'));\n});\n";
//! let injected = inject_source(source);
//! assert!(injected.content.contains("skipIfRouteMissing('home');"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod error;
pub mod extract;
mod fs;
pub mod helpers;
pub mod inject;
pub mod manifest;
pub mod predicates;
pub mod reflection;
pub mod router;
pub mod scan;

pub use cache::{load_manifest, ManifestCache};
pub use error::{GuardError, Result};
pub use extract::extract_body;
pub use helpers::{AppendOutcome, HelperAppender};
pub use inject::{
    inject_source, locate_test_cases, InjectionReport, InjectorOptions, SkipGuardInjector, TestCase,
};
pub use manifest::{RouteManifest, RouteManifestBuilder, DEFAULT_MANIFEST_PATH};
pub use predicates::{Reflection, SkipPredicates, Skipped, TestFramework, STARTER_KIT_ROUTES};
pub use reflection::Psr4Reflection;
pub use router::{CommandRouter, Router, StaticRouter};
pub use scan::{scan, DependencySet, FactoryUsage, SkipGuard};
