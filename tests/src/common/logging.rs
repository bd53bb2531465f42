//! Test logging setup

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test-friendly subscriber once per process
///
/// Honors `RUST_LOG`; defaults to debug output for the workspace crates.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("adamftd_typeahead=debug,adamftd_suggestions=debug")
        });
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
