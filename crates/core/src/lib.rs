//! Core types and traits for the AdamFTD trade search surface
//!
//! This crate provides the foundational abstractions shared by the search
//! box, the dispatch rules and the quick-action catalog:
//!
//! - **Entities**: suggestions, suggestion kinds, roles and the user profile
//! - **Navigation**: navigation targets and the navigator contract
//! - **Suggestion API**: the contract with the suggestion backend
//! - **Configuration**: layered configuration loading
//! - **Error handling**: unified error types
//!

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod entities;
pub mod error;
pub mod navigation;
pub mod suggestion_api;

// Re-export main types for convenience
pub use config::{Config, SuggestionsConfig, TypeaheadConfig};
pub use entities::{Role, Suggestion, SuggestionKind, UserProfile};
pub use error::{Error, Result, ResultExt};
pub use navigation::{NavigationTarget, Navigator};
pub use suggestion_api::SuggestionProvider;

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::entities::{Role, Suggestion, SuggestionKind};
    pub use crate::error::{Result, ResultExt};
    pub use crate::navigation::{NavigationTarget, Navigator};
}
