//! Suggestion providers for the search box
//!
//! This crate implements the suggestion backend contract defined in
//! `adamftd-core`: a built-in catalogue for offline use and an HTTP client for
//! a real suggestion service.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use adamftd_core::config::SuggestionsConfig;
use adamftd_core::error::{Error, Result};
use adamftd_core::SuggestionProvider;
use std::sync::Arc;
use tracing::info;

pub mod error;
mod http;
mod static_provider;

pub use error::SuggestionError;
pub use http::HttpSuggestionProvider;
pub use static_provider::StaticSuggestionProvider;

/// Create a suggestion provider based on configuration
///
/// # Arguments
/// * `config` - Suggestions configuration including provider type
pub fn create_suggestion_provider(
    config: &SuggestionsConfig,
) -> Result<Arc<dyn SuggestionProvider>> {
    match config.provider.as_str() {
        "static" => {
            let provider = StaticSuggestionProvider::with_default_catalogue(config.max_results)?;
            Ok(Arc::new(provider))
        }
        "http" => {
            let api_base_url = config.api_base_url.as_deref().ok_or_else(|| {
                Error::config(
                    "HTTP suggestion provider requires suggestions.api_base_url".to_string(),
                )
            })?;

            info!("Creating HTTP suggestion provider");
            let provider =
                HttpSuggestionProvider::new(api_base_url, config.timeout_secs, config.max_results)?;
            Ok(Arc::new(provider))
        }
        other => Err(Error::config(format!(
            "Unknown suggestions provider: '{other}'. Valid providers: static, http"
        ))),
    }
}
