//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;

use super::defaults::*;
use super::{global_config_path, Config};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `ADAMFTD_` and use double underscores
    /// for nested values. For example:
    /// - `ADAMFTD_TYPEAHEAD__DEBOUNCE_MS=150`
    /// - `ADAMFTD_SUGGESTIONS__PROVIDER=http`
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        // config crate doesn't apply serde defaults for missing sections
        let builder = set_config_default(
            builder,
            "typeahead.debounce_ms",
            default_debounce_ms() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "typeahead.blur_delay_ms",
            default_blur_delay_ms() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "typeahead.min_query_chars",
            default_min_query_chars() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "typeahead.lookup_timeout_ms",
            default_lookup_timeout_ms() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "suggestions.provider",
            default_suggestions_provider(),
        )?;
        let builder = set_config_default(
            builder,
            "suggestions.timeout_secs",
            default_suggestions_timeout_secs() as i64,
        )?;
        let mut builder = set_config_default(
            builder,
            "suggestions.max_results",
            default_max_results() as i64,
        )?;

        // Add the config file if it exists
        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        // Add environment variables with ADAMFTD_ prefix
        builder = builder.add_source(
            Environment::with_prefix("ADAMFTD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.adamftd/config.toml or custom --config path)
    /// 3. Environment variables (ADAMFTD_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
