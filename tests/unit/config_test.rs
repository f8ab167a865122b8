//! Tests for global configuration management

use std::fs;

use namescreen::config::ScreenConfig;
use namescreen::core::models::RuleType;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = ScreenConfig::default();
    assert_eq!(config.matching.fix_signifiers, ['-', '~']);
    assert_eq!(config.matching.anywhere_signifiers, ['"', '*']);
    assert_eq!(config.matching.string_compare_minimum, 3);
    assert!(config.sources.master_avoids.is_none());
}

#[test]
fn test_default_paths_live_in_config_dir() {
    let config = ScreenConfig::default();
    let dir = ScreenConfig::config_path().parent().unwrap().to_path_buf();
    assert!(config.sources.master_avoids_path().starts_with(&dir));
    assert!(config.sources.session_file_path().starts_with(&dir));
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

#[test]
fn test_load_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = ScreenConfig::load_from(&temp.path().join("nope.toml")).unwrap();
    assert_eq!(config, ScreenConfig::default());
}

#[test]
fn test_load_partial_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[matching]\nstring_compare_minimum = 4\n").unwrap();

    let config = ScreenConfig::load_from(&path).unwrap();
    assert_eq!(config.matching.string_compare_minimum, 4);
    assert_eq!(config.matching.fix_signifiers, ['-', '~']);
}

#[test]
fn test_load_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[matching\n").unwrap();

    let err = ScreenConfig::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing"));
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = ScreenConfig::default();
    config.matching.fix_signifiers = vec!['_'];
    config.sources.master_avoids = Some(temp.path().join("avoids.toml"));
    config.save_to(&path).unwrap();

    assert_eq!(ScreenConfig::load_from(&path).unwrap(), config);
}

// =============================================================================
// DERIVED SERVICES
// =============================================================================

#[test]
fn test_classifier_uses_configured_signifiers() {
    let mut config = ScreenConfig::default();
    config.matching.fix_signifiers = vec!['_'];
    let classifier = config.matching.classifier();

    assert_eq!(classifier.rule_type("Dal_"), RuleType::Prefix);
    assert_eq!(classifier.rule_type("Dal-"), RuleType::NameMatch);
}
