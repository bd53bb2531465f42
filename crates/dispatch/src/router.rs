//! Suggestion and raw-query dispatch rules

use adamftd_core::{NavigationTarget, Suggestion, SuggestionKind};
use tracing::trace;

const SEARCH_PATH: &str = "/search";
const COMPANIES_PATH: &str = "/companies";

/// Pure mapping from user intent to a navigation target
///
/// Resolution never looks at search box state; the same input always yields
/// the same target.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchRouter;

impl DispatchRouter {
    /// Resolve a selected suggestion
    ///
    /// | kind | target |
    /// |---|---|
    /// | company | `/companies/<value>` |
    /// | hs_code | `/search?hsCode=<value>` |
    /// | country | `/search?destination=<value>` |
    /// | product, recent | `/search?q=<value>` |
    pub fn resolve(suggestion: &Suggestion) -> NavigationTarget {
        let value = suggestion.value();
        let target = match suggestion.kind() {
            SuggestionKind::Company => NavigationTarget::new(COMPANIES_PATH).with_segment(value),
            SuggestionKind::HsCode => NavigationTarget::new(SEARCH_PATH).with_param("hsCode", value),
            SuggestionKind::Country => {
                NavigationTarget::new(SEARCH_PATH).with_param("destination", value)
            }
            // No dedicated view for these yet; fall back to a free-text search on the value.
            SuggestionKind::Product | SuggestionKind::Recent => free_text_search(value),
        };
        trace!("Resolved {} '{}' to {}", suggestion.kind(), value, target);
        target
    }

    /// Resolve a raw submitted query
    ///
    /// Returns `None` when the query is empty after trimming.
    pub fn resolve_query(query: &str) -> Option<NavigationTarget> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(free_text_search(trimmed))
    }
}

fn free_text_search(text: &str) -> NavigationTarget {
    NavigationTarget::new(SEARCH_PATH).with_param("q", text)
}
