//! Configuration module for the AdamFTD search surface
//!
//! This module provides configuration structures and loading mechanisms for the
//! typeahead controller and the suggestion providers. Configuration can be
//! loaded from TOML files and/or environment variables.

mod defaults;
mod loading;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use defaults::*;

/// Longest quiet period accepted for the debounce timer
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.adamftd/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".adamftd").join("config.toml"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search box timing and thresholds
    #[serde(default)]
    pub typeahead: TypeaheadConfig,

    /// Suggestion provider selection
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

/// Timing and threshold settings for one search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeaheadConfig {
    /// Quiet period after the last edit before a lookup is issued (default: 200ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Delay before a blur hides the suggestion list (default: 200ms)
    #[serde(default = "default_blur_delay_ms")]
    pub blur_delay_ms: u64,

    /// Queries shorter than this many characters never trigger a lookup (default: 2)
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// A lookup that has not settled after this long is treated as failed (default: 5000ms)
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

impl TypeaheadConfig {
    /// Create configuration from builder
    pub fn builder() -> TypeaheadConfigBuilder {
        TypeaheadConfigBuilder::default()
    }

    /// Get the debounce duration
    pub fn debounce_duration(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Get the blur delay duration
    pub fn blur_delay(&self) -> Duration {
        Duration::from_millis(self.blur_delay_ms)
    }

    /// Get the lookup timeout duration
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            blur_delay_ms: default_blur_delay_ms(),
            min_query_chars: default_min_query_chars(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
        }
    }
}

/// Builder for TypeaheadConfig
#[derive(Debug, Default)]
pub struct TypeaheadConfigBuilder {
    config: TypeaheadConfig,
}

impl TypeaheadConfigBuilder {
    /// Set the debounce quiet period in milliseconds
    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.debounce_ms = ms;
        self
    }

    /// Set the blur delay in milliseconds
    pub fn blur_delay_ms(mut self, ms: u64) -> Self {
        self.config.blur_delay_ms = ms;
        self
    }

    /// Set the minimum query length that triggers a lookup
    pub fn min_query_chars(mut self, chars: usize) -> Self {
        self.config.min_query_chars = chars;
        self
    }

    /// Set the lookup timeout in milliseconds
    pub fn lookup_timeout_ms(mut self, ms: u64) -> Self {
        self.config.lookup_timeout_ms = ms;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TypeaheadConfig {
        self.config
    }
}

/// Configuration for the suggestion backend
///
/// # Providers
/// - `static` (default): built-in catalogue, no network access
/// - `http`: JSON suggestion endpoint at `api_base_url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// Provider type: "static" (default), "http"
    #[serde(default = "default_suggestions_provider")]
    pub provider: String,

    /// Base URL of the suggestion endpoint (http only)
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// HTTP request timeout in seconds (http only)
    #[serde(default = "default_suggestions_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum suggestions returned per lookup
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            provider: default_suggestions_provider(),
            api_base_url: None,
            timeout_secs: default_suggestions_timeout_secs(),
            max_results: default_max_results(),
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.typeahead.min_query_chars == 0 {
            return Err(Error::config(
                "typeahead.min_query_chars must be greater than 0".to_string(),
            ));
        }

        if self.typeahead.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::config(format!(
                "typeahead.debounce_ms too large (max {MAX_DEBOUNCE_MS}, got {})",
                self.typeahead.debounce_ms
            )));
        }

        if self.typeahead.lookup_timeout_ms == 0 {
            return Err(Error::config(
                "typeahead.lookup_timeout_ms must be greater than 0".to_string(),
            ));
        }

        let valid_providers = ["static", "http"];
        if !valid_providers.contains(&self.suggestions.provider.as_str()) {
            return Err(Error::config(format!(
                "Invalid suggestions provider '{}'. Must be one of: {:?}",
                self.suggestions.provider, valid_providers
            )));
        }

        if self.suggestions.provider == "http" && self.suggestions.api_base_url.is_none() {
            return Err(Error::config(
                "suggestions.api_base_url is required for the http provider".to_string(),
            ));
        }

        if self.suggestions.max_results == 0 {
            return Err(Error::config(
                "suggestions.max_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
