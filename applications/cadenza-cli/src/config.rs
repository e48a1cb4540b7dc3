/// Host configuration
use crate::error::{CliError, Result};
use cadenza_catalog_client::CatalogConfig;
use cadenza_playback::PlaybackConfig;
use cadenza_radio::RadioConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File read when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "cadenza.toml";

/// Prefix of environment overrides, e.g. `CADENZA_CATALOG__BASE_URL`
pub const ENV_PREFIX: &str = "CADENZA";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    pub catalog: CatalogConfig,
    pub radio: RadioConfig,
    pub playback: PlaybackConfig,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `cadenza.toml` in the working
    /// directory is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`CliConfig::load`] but reading overrides from `env` instead of
    /// the process environment when given
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Sections are split on a double underscore so keys keep theirs
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "catalog.base_url is required (set CADENZA_CATALOG__BASE_URL)".to_string(),
            ));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(CliError::Config(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }

        self.playback.validate()?;
        self.radio.validate()?;
        Ok(())
    }
}
