//! Tests for the configuration module.
//!
//! Each test uses its own environment prefix so that parallel tests do not
//! see each other's overrides.

use super::TestFixture;
use crate::config::{
    ConfigLoader, DatasetConfig, HuaConfig, LogConfig, OutputFormat, Validate,
};
use crate::error::config::ConfigError;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = HuaConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dataset.path, PathBuf::from("dictionary-dataset.txt"));
    assert_eq!(config.dataset.comment_marker, "#");
    assert_eq!(config.report.format, OutputFormat::Text);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = HuaConfig::default();

    config.log.level = "verbose".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.log.level = "debug".to_string();
    config.dataset.comment_marker = String::new();
    assert!(config.validate().is_err());

    config.dataset.comment_marker = " #".to_string();
    assert!(config.validate().is_err());

    config.dataset.comment_marker = "//".to_string();
    config.dataset.path = PathBuf::new();
    assert!(config.validate().is_err());

    config.dataset.path = PathBuf::from("words.txt");
    assert!(config.validate().is_ok());
}

#[test]
fn test_section_validation() {
    assert!(LogConfig::default().validate().is_ok());
    assert!(DatasetConfig::default().validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "hua.toml",
            r#"
            [dataset]
            path = "/data/words.txt"

            [report]
            format = "json"
            sort_matches = false

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_HUA_FILE")
        .load()
        .unwrap();

    assert_eq!(config.dataset.path, PathBuf::from("/data/words.txt"));
    assert_eq!(config.report.format, OutputFormat::Json);
    assert!(!config.report.sort_matches);
    assert_eq!(config.log.level, "debug");

    // Unset values keep their defaults
    assert_eq!(config.dataset.comment_marker, "#");
    assert!(config.report.show_insertions);
}

#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("hua.json", r#"{ "dataset": { "comment_marker": "%" } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_HUA_JSON")
        .load()
        .unwrap();
    assert_eq!(config.dataset.comment_marker, "%");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("hua.toml", "[dataset]\npath = \"from-file.txt\"\n")
        .unwrap();

    fixture.set_env("TEST_HUA_ENV__DATASET__PATH", "from-env.txt");
    fixture.set_env("TEST_HUA_ENV__REPORT__SHOW_INSERTIONS", "false");

    let config = ConfigLoader::new(Some(&config_path), "TEST_HUA_ENV")
        .load()
        .unwrap();

    assert_eq!(config.dataset.path, PathBuf::from("from-env.txt"));
    assert!(!config.report.show_insertions);
}

#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.path("absent.toml");

    let result = ConfigLoader::new(Some(&missing), "TEST_HUA_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(path)) if path == missing));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("hua.ini", "[dataset]\n").unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_HUA_INI").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[dataset\npath = words.txt\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_HUA_INVALID");
    assert!(loader.load().is_err());
}

#[test]
fn test_invalid_value_in_file_fails_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("hua.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_HUA_LEVEL").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Report settings are fully typed, so bad values fail while parsing.
#[test]
fn test_report_section_is_checked_by_parsing() {
    let fixture = TestFixture::new().unwrap();
    let bad_format = fixture
        .write_file("format.toml", "[report]\nformat = \"xml\"\n")
        .unwrap();
    let result = ConfigLoader::new(Some(&bad_format), "TEST_HUA_REPORT_FORMAT").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));

    let any_flags = fixture
        .write_file(
            "flags.toml",
            "[report]\nformat = \"json\"\nsort_matches = false\nshow_insertions = false\n",
        )
        .unwrap();
    let config = ConfigLoader::new(Some(&any_flags), "TEST_HUA_REPORT_FLAGS")
        .load()
        .unwrap();
    assert_eq!(config.report.format, OutputFormat::Json);
    assert!(!config.report.sort_matches);
    assert!(!config.report.show_insertions);
}

/// Generated configuration loads back to the defaults.
#[test]
fn test_generated_config_round_trips() {
    let fixture = TestFixture::new().unwrap();
    let toml = HuaConfig::default().to_toml().unwrap();
    let config_path = fixture.write_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_HUA_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config, HuaConfig::default());
}
