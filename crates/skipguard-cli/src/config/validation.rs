use crate::config::SkipguardConfig;
use crate::error::{ConfigError, Result};

impl SkipguardConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.routes_command.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(ConfigError::MissingField {
                field: "routes_command".to_string(),
                hint: "Provide the command that prints the route list as JSON, e.g. [\"php\", \"artisan\", \"route:list\", \"--json\"]".to_string(),
            }
            .into());
        }

        if self.extension.is_empty() {
            return Err(ConfigError::MissingField {
                field: "extension".to_string(),
                hint: "Set extension = \"php\"".to_string(),
            }
            .into());
        }

        if self.extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "extension".to_string(),
                value: self.extension.clone(),
                hint: "Give the extension without the leading dot".to_string(),
            }
            .into());
        }

        if self.target_subdir.is_empty() {
            return Err(ConfigError::MissingField {
                field: "target_subdir".to_string(),
                hint: "Set target_subdir to the directory holding browser tests, e.g. \"Browser\"".to_string(),
            }
            .into());
        }

        if self.target_subdir.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "target_subdir".to_string(),
                value: self.target_subdir.clone(),
                hint: "target_subdir is a single directory name, not a path".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
