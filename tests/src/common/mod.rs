//! End-to-end test infrastructure
//!
//! This module wires the real crates together the way a landing page does:
//! a user profile, the quick-action catalog and a search session over the
//! built-in suggestion catalogue.

#![allow(dead_code)]

pub mod fixtures;
pub mod logging;

use anyhow::{Context, Result};
use std::future::Future;
use std::time::Duration;

// Re-export key types and utilities
pub use fixtures::*;
pub use logging::*;

/// Wrap a test future with a timeout
///
/// Prevents tests from hanging indefinitely by adding a timeout.
/// Returns an error if the future doesn't complete within the specified duration.
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(duration, future)
        .await
        .context(format!("Test timed out after {duration:?}"))?
}
