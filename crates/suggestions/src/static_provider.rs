//! In-memory suggestion provider backed by a fixed catalogue

use adamftd_core::error::Result;
use adamftd_core::{Suggestion, SuggestionKind, SuggestionProvider};
use async_trait::async_trait;
use tracing::{debug, info};

/// (kind, value, label, description)
const DEFAULT_CATALOGUE: &[(SuggestionKind, &str, &str, &str)] = &[
    (
        SuggestionKind::HsCode,
        "730890",
        "730890",
        "Iron/steel structures, parts",
    ),
    (
        SuggestionKind::Company,
        "comp_123",
        "Müller Stahlbau GmbH",
        "Hamburg, DE",
    ),
    (
        SuggestionKind::Country,
        "DE",
        "Germany",
        "15.2M shipments",
    ),
    (
        SuggestionKind::HsCode,
        "870899",
        "870899",
        "Motor vehicle parts and accessories",
    ),
    (
        SuggestionKind::HsCode,
        "847130",
        "847130",
        "Portable data processing machines",
    ),
    (
        SuggestionKind::Company,
        "comp_456",
        "ACME Industrial Corp",
        "Chicago, US",
    ),
    (
        SuggestionKind::Company,
        "comp_789",
        "Widget GmbH",
        "Stuttgart, DE",
    ),
    (
        SuggestionKind::Country,
        "ES",
        "Spain",
        "6.8M shipments",
    ),
    (
        SuggestionKind::Country,
        "PL",
        "Poland",
        "4.1M shipments",
    ),
    (
        SuggestionKind::Country,
        "VN",
        "Vietnam",
        "9.3M shipments",
    ),
    (
        SuggestionKind::Product,
        "automotive parts",
        "Automotive parts",
        "Chapter 87 components",
    ),
    (
        SuggestionKind::Product,
        "steel beams",
        "Steel beams",
        "Structural steel sections",
    ),
];

/// Suggestion provider that filters a fixed catalogue
///
/// An entry matches when its label, value or description contains the query,
/// ignoring case. Catalogue order is preserved.
#[derive(Debug, Clone)]
pub struct StaticSuggestionProvider {
    entries: Vec<Suggestion>,
    max_results: usize,
}

impl StaticSuggestionProvider {
    /// Create a provider over explicit entries
    pub fn new(entries: Vec<Suggestion>, max_results: usize) -> Self {
        Self {
            entries,
            max_results,
        }
    }

    /// Create a provider over the built-in catalogue
    pub fn with_default_catalogue(max_results: usize) -> Result<Self> {
        let entries = DEFAULT_CATALOGUE
            .iter()
            .map(|(kind, value, label, description)| {
                Suggestion::new(*kind, *value, *label)
                    .map(|suggestion| suggestion.with_description(*description))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Creating static suggestion provider with {} entries",
            entries.len()
        );
        Ok(Self::new(entries, max_results))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn matches(suggestion: &Suggestion, needle: &str) -> bool {
    suggestion.label().to_lowercase().contains(needle)
        || suggestion.value().to_lowercase().contains(needle)
        || suggestion
            .description()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

#[async_trait]
impl SuggestionProvider for StaticSuggestionProvider {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let results: Vec<Suggestion> = self
            .entries
            .iter()
            .filter(|suggestion| matches(suggestion, &needle))
            .take(self.max_results)
            .cloned()
            .collect();

        debug!("Static lookup '{}' matched {} entries", query, results.len());
        Ok(results)
    }
}
