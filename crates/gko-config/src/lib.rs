//! # gko-config
//!
//! Layered configuration loading for gko using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GKO_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.gko.toml`
//! 4. User-level `~/.config/gko/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GKO_OUTPUT__FORMAT` -> `output.format`,
//! `GKO_LOGGING__LEVEL` -> `logging.level`. `GKO_LOG` is the tracing
//! filter and is not a configuration key.
//!
//! # Usage
//!
//! ```no_run
//! use gko_config::GkoConfig;
//!
//! let config = GkoConfig::load().expect("config");
//! println!("format: {}", config.output.format);
//! ```

mod error;
mod logging;
mod output;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".gko.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GkoConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GkoConfig {
    /// Load configuration from all default sources.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(None)
    }

    /// Load configuration, layering `extra` above the discovered files.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source is malformed or a value is invalid.
    pub fn load_with_file(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(extra).extract()?;
        config.logging.validate()?;
        Ok(config)
    }

    /// Build the default figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain with an optional explicit file.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file. Missing files are an error only once extracted.
        if let Some(path) = extra {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("GKO_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gko").join("config.toml"))
    }
}
