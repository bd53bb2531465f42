//! Library interface for the adamftd CLI
//!
//! Exposes the pieces of the command-line front end that integration tests
//! exercise, keeping the binary logic in main.rs.

pub mod repl;

use adamftd_core::{NavigationTarget, Navigator, Suggestion, TypeaheadConfig};
use adamftd_dispatch::ActionDescriptor;
use adamftd_typeahead::{SearchBoxState, SessionHandle};
use anyhow::Context;
use std::time::Duration;

// Re-export commonly needed types for tests
pub use adamftd_core::config::Config;
pub use anyhow::Result;
pub use std::path::Path;

/// Slack added on top of configured delays when waiting for a session to settle
const SETTLE_MARGIN: Duration = Duration::from_millis(50);

/// Navigator that prints each target to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        println!("-> {target}");
    }
}

/// Load and validate configuration from `config_path` or the global location
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Wait for the debounce to pass and any lookup it started to settle
pub async fn settle(handle: &mut SessionHandle, config: &TypeaheadConfig) -> Result<SearchBoxState> {
    tokio::time::sleep(config.debounce_duration() + SETTLE_MARGIN).await;

    let limit = config.lookup_timeout() + SETTLE_MARGIN;
    let state = tokio::time::timeout(limit, handle.wait_for(|state| !state.loading))
        .await
        .context("Timed out waiting for suggestions")??;
    Ok(state)
}

/// One numbered line per suggestion, numbering from 1
pub fn format_suggestions(suggestions: &[Suggestion]) -> Vec<String> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let mut line = format!(
                "{:>2}. [{}] {}",
                i + 1,
                suggestion.kind().badge(),
                suggestion.label()
            );
            if let Some(description) = suggestion.description() {
                line.push_str(&format!(" ({description})"));
            }
            line
        })
        .collect()
}

pub fn format_action(action: &ActionDescriptor) -> String {
    format!(
        "{:<20} {:<36} {}",
        action.label, action.description, action.target
    )
}
