//! Configuration for the Skipguard CLI with multi-source loading.
//!
//! Priority: environment (`SKIPGUARD_*`) > `skipguard.toml` > defaults.
//! Only `SKIPGUARD_<KEY>` variables naming a config key are read.

mod defaults;
mod loading;
mod validation;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skipguard::{InjectorOptions, Psr4Reflection};
use std::path::{Path, PathBuf};

pub use defaults::*;
pub use loading::CONFIG_FILE;

/// Skipguard configuration - loaded from `skipguard.toml` and the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkipguardConfig {
    /// Where `manifest` writes the route snapshot and `check` reads it.
    ///
    /// `append-helpers` writes this location, relative to the bootstrap
    /// file's directory, into the runtime helpers. It should therefore sit
    /// under that directory.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// Default directory for `inject`.
    #[serde(default = "default_test_dir")]
    pub test_dir: PathBuf,

    /// Directory name a file must sit under to be injected.
    #[serde(default = "default_target_subdir")]
    pub target_subdir: String,

    /// File names `inject` never touches.
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    /// Test file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File the runtime helpers are appended to.
    #[serde(default = "default_bootstrap_file")]
    pub bootstrap_file: PathBuf,

    /// Command printing the route table as JSON.
    #[serde(default = "default_routes_command")]
    pub routes_command: Vec<String>,

    /// PSR-4 namespace prefix to directory map used by `check method`.
    #[serde(default = "default_autoload")]
    pub autoload: IndexMap<String, PathBuf>,
}

impl Default for SkipguardConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            test_dir: default_test_dir(),
            target_subdir: default_target_subdir(),
            excluded_files: default_excluded_files(),
            extension: default_extension(),
            bootstrap_file: default_bootstrap_file(),
            routes_command: default_routes_command(),
            autoload: default_autoload(),
        }
    }
}

impl SkipguardConfig {
    /// File selection options for the injector.
    pub fn injector_options(&self) -> InjectorOptions {
        InjectorOptions {
            target_subdir: self.target_subdir.clone(),
            excluded_files: self.excluded_files.clone(),
            extension: self.extension.clone(),
        }
    }

    /// Class lookup rooted at `root` using the configured autoload map.
    pub fn reflection(&self, root: &Path) -> Psr4Reflection {
        Psr4Reflection::new(root, self.autoload.clone())
    }
}
