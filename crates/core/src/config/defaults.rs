//! Default values and functions for configuration

// Default constants
pub(crate) const DEFAULT_SUGGESTIONS_PROVIDER: &str = "static";

pub(crate) fn default_debounce_ms() -> u64 {
    200
}

pub(crate) fn default_blur_delay_ms() -> u64 {
    200
}

pub(crate) fn default_min_query_chars() -> usize {
    2
}

pub(crate) fn default_lookup_timeout_ms() -> u64 {
    5_000
}

pub(crate) fn default_suggestions_provider() -> String {
    DEFAULT_SUGGESTIONS_PROVIDER.to_string()
}

pub(crate) fn default_suggestions_timeout_secs() -> u64 {
    5
}

pub(crate) fn default_max_results() -> usize {
    8
}
