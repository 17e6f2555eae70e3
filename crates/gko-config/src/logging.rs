//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default tracing level when neither `GKO_LOG` nor `-q`/`-v` is given.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Reject levels tracing would not understand.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an unknown level name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("expected one of {}, got '{}'", LEVELS.join(", "), self.level),
            })
        }
    }
}
