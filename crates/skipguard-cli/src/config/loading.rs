use crate::config::SkipguardConfig;
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "skipguard.toml";

/// Prefix of the environment variables overriding config keys.
const ENV_PREFIX: &str = "SKIPGUARD_";

/// Config keys the environment may set. Other `SKIPGUARD_*` variables
/// belong to the surrounding tooling and are ignored.
const ENV_KEYS: &[&str] = &[
    "manifest_path",
    "test_dir",
    "target_subdir",
    "excluded_files",
    "extension",
    "bootstrap_file",
    "routes_command",
    "autoload",
];

impl SkipguardConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_path` must exist; the implicit `skipguard.toml`
    /// is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(config_path)?
            .extract()
            .map_err(|e| ConfigError::Extract(e.to_string()))?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The layered provider stack, without extraction.
    pub fn figment(config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.is_file().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "reading config file");
            figment = figment.merge(Toml::file(path));
        }

        // SKIPGUARD_TEST_DIR, SKIPGUARD_BOOTSTRAP_FILE, ...
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS)))
    }
}
