//! HTTP suggestion provider
//!
//! Talks to a JSON endpoint: `GET {base}/suggestions?q=<query>&limit=<n>`
//! answering `{"suggestions": [{"kind", "value", "label", "description"}]}`.

use crate::error::SuggestionError;
use adamftd_core::error::Result;
use adamftd_core::{Suggestion, SuggestionProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Response from the suggestion endpoint
#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    #[serde(default)]
    suggestions: Vec<serde_json::Value>,
}

/// Suggestion provider backed by a remote endpoint
pub struct HttpSuggestionProvider {
    client: Client,
    endpoint: String,
    max_results: usize,
}

impl HttpSuggestionProvider {
    /// Create a new HTTP suggestion provider
    ///
    /// # Arguments
    /// * `api_base_url` - Base URL; `/suggestions` is appended
    /// * `timeout_secs` - Request timeout in seconds
    /// * `max_results` - Upper bound sent as `limit` and enforced on the response
    pub fn new(api_base_url: &str, timeout_secs: u64, max_results: usize) -> Result<Self> {
        let endpoint = endpoint_url(api_base_url);
        info!("Initializing HTTP suggestion provider");
        info!("  Endpoint: {endpoint}");
        info!("  Timeout: {timeout_secs}s");

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                SuggestionError::ConfigError(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            max_results,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_url(api_base_url: &str) -> String {
    format!("{}/suggestions", api_base_url.trim_end_matches('/'))
}

/// Decode entries one by one so a single bad entry doesn't sink the batch
fn decode_suggestions(raw: Vec<serde_json::Value>, max_results: usize) -> Vec<Suggestion> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<Suggestion>(value) {
            Ok(suggestion) => Some(suggestion),
            Err(e) => {
                warn!("Dropping malformed suggestion: {e}");
                None
            }
        })
        .take(max_results)
        .collect()
}

#[async_trait]
impl SuggestionProvider for HttpSuggestionProvider {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>> {
        let limit = self.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| {
                let error_kind = if e.is_timeout() {
                    "timeout"
                } else if e.is_connect() {
                    "connection"
                } else if e.is_request() {
                    "request build"
                } else {
                    "unknown"
                };
                SuggestionError::LookupError(format!(
                    "Suggestion request failed ({error_kind}): {e}"
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(SuggestionError::LookupError(format!(
                "Suggestion endpoint returned error {status}: {error_text}"
            ))
            .into());
        }

        let body: SuggestionsResponse = response.json().await.map_err(|e| {
            SuggestionError::LookupError(format!("Failed to parse suggestion response: {e}"))
        })?;

        let suggestions = decode_suggestions(body.suggestions, self.max_results);
        debug!(
            "HTTP lookup '{}' returned {} suggestions",
            query,
            suggestions.len()
        );
        Ok(suggestions)
    }
}
