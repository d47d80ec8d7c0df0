//! Process-wide route manifest cache.
//!
//! The manifest is loaded on first use and kept for the rest of the process.
//! It is never invalidated: a test run sees the manifest as it was when the
//! first predicate asked for it. Initialization goes through a `OnceCell`, so
//! concurrent first access loads the file once and every later read is
//! lock-free.

use std::path::{Path, PathBuf};

use once_cell::sync::{Lazy, OnceCell};
use tracing::debug;

use crate::manifest::{RouteManifest, DEFAULT_MANIFEST_PATH};

static GLOBAL: Lazy<ManifestCache> = Lazy::new(|| ManifestCache::new(DEFAULT_MANIFEST_PATH));

/// Lazily loaded, load-once manifest holder.
#[derive(Debug)]
pub struct ManifestCache {
    path: PathBuf,
    manifest: OnceCell<RouteManifest>,
}

impl ManifestCache {
    /// Creates an unloaded cache for the manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            manifest: OnceCell::new(),
        }
    }

    /// Creates a cache that is already loaded with `manifest`.
    #[must_use]
    pub fn preloaded(manifest: RouteManifest) -> Self {
        Self {
            path: PathBuf::new(),
            manifest: OnceCell::with_value(manifest),
        }
    }

    /// The process-wide cache reading [`DEFAULT_MANIFEST_PATH`] relative to
    /// the working directory.
    pub fn global() -> &'static ManifestCache {
        &GLOBAL
    }

    /// Where the manifest is read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached manifest, loading it on first call.
    ///
    /// A missing or unparsable file yields the empty manifest; that fallback
    /// is cached like any other result.
    pub fn load(&self) -> &RouteManifest {
        self.manifest.get_or_init(|| {
            RouteManifest::read(&self.path).unwrap_or_else(|| {
                debug!(path = %self.path.display(), "no usable route manifest, using empty fallback");
                RouteManifest::empty()
            })
        })
    }

    /// Returns true once the manifest has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.manifest.get().is_some()
    }
}

/// Loads the process-wide manifest.
pub fn load_manifest() -> &'static RouteManifest {
    ManifestCache::global().load()
}
