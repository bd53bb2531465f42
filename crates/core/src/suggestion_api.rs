//! Suggestion lookup trait definition
//!
//! This trait defines the contract with the suggestion backend.
//! Implementations can be found in the suggestions crate.

use crate::entities::Suggestion;
use crate::error::Result;
use async_trait::async_trait;

/// Source of typed suggestions for partial query text
///
/// Callers may issue lookups in quick succession. Implementations are not
/// required to cancel superseded work; callers ignore stale results.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Return an ordered batch of suggestions for `query`
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>>;
}
