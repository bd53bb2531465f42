//! Tests for configuration module

use super::*;
use crate::error::{Error, Result};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_temp_config_file(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .map_err(|e| Error::config(format!("Failed to create temp file: {e}")))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write temp file: {e}")))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush temp file: {e}")))?;
    Ok(file)
}

#[test]
fn test_from_toml_str_valid() {
    let toml = r#"
        [typeahead]
        debounce_ms = 150
        min_query_chars = 3

        [suggestions]
        provider = "http"
        api_base_url = "http://localhost:9000/api"
    "#;

    let config = Config::from_toml_str(toml).expect("Failed to parse valid TOML");
    assert_eq!(config.typeahead.debounce_ms, 150);
    assert_eq!(config.typeahead.min_query_chars, 3);
    assert_eq!(config.typeahead.blur_delay_ms, 200);
    assert_eq!(config.suggestions.provider, "http");
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_empty_uses_defaults() {
    let config = Config::from_toml_str("").expect("Failed to parse empty TOML");
    assert_eq!(config.typeahead, TypeaheadConfig::default());
    assert_eq!(config.typeahead.debounce_ms, 200);
    assert_eq!(config.typeahead.lookup_timeout_ms, 5_000);
    assert_eq!(config.suggestions.provider, "static");
    assert_eq!(config.suggestions.max_results, 8);
}

#[test]
fn test_from_toml_str_invalid_syntax() {
    let toml = r#"
        [typeahead
        debounce_ms = 10
    "#;

    let result = Config::from_toml_str(toml);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to parse TOML"));
}

#[test]
fn test_from_file_reads_values() {
    let file = create_temp_config_file(
        r#"
        [typeahead]
        blur_delay_ms = 350
    "#,
    )
    .expect("temp file");

    let config = Config::from_file(file.path()).expect("Failed to load config");
    assert_eq!(config.typeahead.blur_delay_ms, 350);
    assert_eq!(config.typeahead.debounce_ms, 200);
    assert_eq!(config.suggestions.provider, "static");
}

#[test]
fn test_from_file_missing_path_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::from_file(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.typeahead.min_query_chars, 2);
    assert_eq!(config.suggestions.timeout_secs, 5);
}

#[test]
fn test_from_file_env_overrides_file() {
    let file = create_temp_config_file(
        r#"
        [typeahead]
        lookup_timeout_ms = 2500
    "#,
    )
    .expect("temp file");

    std::env::set_var("ADAMFTD_TYPEAHEAD__LOOKUP_TIMEOUT_MS", "1234");
    let result = Config::from_file(file.path());
    std::env::remove_var("ADAMFTD_TYPEAHEAD__LOOKUP_TIMEOUT_MS");

    let config = result.expect("Failed to load config");
    assert_eq!(config.typeahead.lookup_timeout_ms, 1234);
}

#[test]
fn test_validate_rejects_zero_min_chars() {
    let mut config = Config::default();
    config.typeahead.min_query_chars = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("min_query_chars"));
}

#[test]
fn test_validate_rejects_huge_debounce() {
    let mut config = Config::default();
    config.typeahead.debounce_ms = 60_000;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("debounce_ms too large"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.typeahead.lookup_timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_provider() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.suggestions.provider = "elastic".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Invalid suggestions provider"));

    config.suggestions.provider = "http".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("api_base_url is required"));

    config.suggestions.api_base_url = Some("http://localhost:9000".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_save_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.typeahead.debounce_ms = 120;
    config.save(&path).expect("save");

    let loaded = Config::from_file(&path).expect("reload");
    assert_eq!(loaded.typeahead.debounce_ms, 120);
}

#[test]
fn test_builder_and_durations() {
    let config = TypeaheadConfig::builder()
        .debounce_ms(50)
        .blur_delay_ms(75)
        .min_query_chars(1)
        .lookup_timeout_ms(900)
        .build();
    assert_eq!(config.debounce_duration(), Duration::from_millis(50));
    assert_eq!(config.blur_delay(), Duration::from_millis(75));
    assert_eq!(config.lookup_timeout(), Duration::from_millis(900));
    assert_eq!(config.min_query_chars, 1);
}
