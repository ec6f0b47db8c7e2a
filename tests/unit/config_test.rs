//! Tests for validator configuration

use std::fs;

use easycut::config::{Config, ConfigError};
use easycut::form::DEFAULT_MIN_PASSWORD_LEN;
use tempfile::TempDir;

use crate::common::valid_client_form;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.phone.ddds, None);
    assert_eq!(config.form.min_password_len, DEFAULT_MIN_PASSWORD_LEN);
    assert!(config.output.color);
}

#[test]
fn test_empty_content_gives_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = Config::parse("[output]\ncolor = false\n").unwrap();
    assert!(!config.output.color);
    assert_eq!(config.form.min_password_len, DEFAULT_MIN_PASSWORD_LEN);
}

#[test]
fn test_ddd_table_override() {
    let config = Config::parse("[phone]\nddds = [\"21\", \"22\"]\n").unwrap();
    let validator = config.phone_validator();
    assert!(validator.is_valid_ddd("21"));
    assert!(!validator.is_valid_ddd("11"));
}

#[test]
fn test_default_ddd_table_without_override() {
    let validator = Config::default().phone_validator();
    assert!(validator.is_valid_ddd("11"));
    assert!(!validator.is_valid_ddd("20"));
}

#[test]
fn test_invalid_ddd_rejected() {
    for bad in ["1", "011", "10", "ab"] {
        let content = format!("[phone]\nddds = [\"{bad}\"]\n");
        let err = Config::parse(&content).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDdd(ref d) if d == bad), "{bad}: {err}");
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = Config::parse("[form\nmin_password_len = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_form_validator_uses_password_policy() {
    let config = Config::parse("[form]\nmin_password_len = 20\n").unwrap();
    let report = config.form_validator().validate_client(&valid_client_form());
    assert_eq!(report.errors, vec!["password must have at least 20 characters"]);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[form]\nmin_password_len = 12\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.form.min_password_len, 12);
}

#[test]
fn test_load_from_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_parse_error_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "color = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_config_save_and_load() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    let mut config = Config::default();
    config.phone.ddds = Some(vec!["11".to_string(), "21".to_string()]);
    config.output.color = false;

    let content = toml::to_string_pretty(&config).unwrap();
    fs::write(&config_path, &content).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded, config);
}
