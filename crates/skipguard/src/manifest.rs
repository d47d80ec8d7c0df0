//! Route manifest model and builder.
//!
//! The manifest is a JSON snapshot of every named route the application
//! registers. It is regenerated wholesale before a browser test run and read
//! back by [`crate::cache::ManifestCache`] so tests can decide whether to skip
//! without booting the router.

use std::path::{Path, PathBuf};

use chrono::{Local, SecondsFormat};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::router::Router;

/// Default location of the manifest, relative to the project root.
pub const DEFAULT_MANIFEST_PATH: &str = "tests/Browser/.route-manifest.json";

/// Snapshot of all named routes at a point in time.
///
/// Every field defaults when absent, so a hand-written `{"routes": [...]}`
/// file still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// ISO-8601 generation time; absent for the empty fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,

    /// Number of entries in `routes`.
    #[serde(default)]
    pub route_count: usize,

    /// Route names in registration order, without duplicates.
    #[serde(default)]
    pub routes: Vec<String>,
}

impl RouteManifest {
    /// Builds a manifest from route names, dropping repeated names while
    /// keeping the first registration's position.
    pub fn new<I, S>(generated_at: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let routes: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        Self {
            generated_at: Some(generated_at.into()),
            route_count: routes.len(),
            routes,
        }
    }

    /// The fallback used when no usable manifest exists on disk.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no routes are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.routes.iter().any(|route| route == name)
    }

    /// Reads a manifest, returning `None` if the file is missing or not valid
    /// manifest JSON.
    pub fn read(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "route manifest not readable");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "route manifest is not valid JSON");
                None
            }
        }
    }

    /// Serializes the manifest as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Produces a [`RouteManifest`] from the application's router and writes it.
#[derive(Debug, Clone)]
pub struct RouteManifestBuilder {
    output: PathBuf,
}

impl RouteManifestBuilder {
    /// Creates a builder writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Destination path of the manifest.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Enumerates the router's named routes into a fresh manifest.
    pub fn build(&self, router: &dyn Router) -> Result<RouteManifest> {
        let names = router.named_routes()?;
        let generated_at = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        Ok(RouteManifest::new(generated_at, names))
    }

    /// Builds the manifest and overwrites the output file unconditionally.
    ///
    /// The parent directory is created if needed. Zero routes is a valid
    /// result.
    ///
    /// # Errors
    ///
    /// Fails if the router cannot be enumerated or the file cannot be written.
    pub fn generate(&self, router: &dyn Router) -> Result<RouteManifest> {
        let manifest = self.build(router)?;

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::error::GuardError::io("create directory", parent, e))?;
        }
        crate::fs::write_atomic(&self.output, &manifest.to_json()?)?;

        info!(
            routes = manifest.route_count,
            path = %self.output.display(),
            "route manifest written"
        );
        Ok(manifest)
    }
}
