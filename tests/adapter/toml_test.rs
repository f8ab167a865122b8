//! Tests for the TOML master avoid source

use std::fs;

use namescreen::adapters::toml::TomlAvoidSource;
use namescreen::core::ScreenError;
use namescreen::core::models::{Category, RuleType};
use namescreen::core::ports::AvoidSource;
use tempfile::TempDir;

const MASTER: &str = r#"
[[inn_usan]]
value = "mab"
type = "suffix"
description = "monoclonal antibodies"

[[inn_usan]]
value = "vir"
type = "string_compare"

[[linguistic]]
value = "kak"
type = "anywhere"

[[linguistic]]
value = "untyped"

[[market_research]]
value = "Holvira"
type = "name_match"
description = "Competitor trademark"
"#;

fn write_master(content: &str) -> (TempDir, TomlAvoidSource) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("avoids.toml");
    fs::write(&path, content).unwrap();
    (temp, TomlAvoidSource::new(path))
}

#[test]
fn test_load_master_file() {
    let (_temp, source) = write_master(MASTER);
    let avoids = source.load_master().unwrap().unwrap();

    let got: Vec<_> = avoids
        .iter()
        .map(|r| (r.value.as_str(), r.rule_type, r.category))
        .collect();
    assert_eq!(
        got,
        [
            ("mab", RuleType::Suffix, Category::InnUsan),
            ("vir", RuleType::NameMatch, Category::InnUsan),
            ("kak", RuleType::Anywhere, Category::Linguistic),
            ("Holvira", RuleType::NameMatch, Category::MarketResearch),
        ]
    );
    assert_eq!(avoids.records()[0].description, "monoclonal antibodies");
    assert_eq!(avoids.records()[1].description, "");
}

#[test]
fn test_missing_file_is_none() {
    let temp = TempDir::new().unwrap();
    let source = TomlAvoidSource::new(temp.path().join("absent.toml"));
    assert!(source.load_master().unwrap().is_none());
}

#[test]
fn test_directory_is_none() {
    let temp = TempDir::new().unwrap();
    let source = TomlAvoidSource::new(temp.path().to_path_buf());
    assert!(source.load_master().unwrap().is_none());
}

#[test]
fn test_empty_file_is_empty_collection() {
    let (_temp, source) = write_master("");
    assert!(source.load_master().unwrap().unwrap().is_empty());
}

#[test]
fn test_duplicate_rows_collapse() {
    let (_temp, source) = write_master(
        "[[inn_usan]]\nvalue = \"mab\"\ntype = \"suffix\"\n\n[[inn_usan]]\nvalue = \"mab\"\ntype = \"suffix\"\n",
    );
    assert_eq!(source.load_master().unwrap().unwrap().len(), 1);
}

#[test]
fn test_unknown_rule_type_is_source_error() {
    let (_temp, source) = write_master("[[linguistic]]\nvalue = \"kak\"\ntype = \"exact\"\n");
    let err = source.load_master().unwrap_err();

    let screen = err.downcast_ref::<ScreenError>().unwrap();
    assert!(matches!(screen, ScreenError::Source { .. }));
    assert!(!screen.is_user_error());
    assert!(err.to_string().contains("Invalid rule type"));
}

#[test]
fn test_malformed_toml_is_error() {
    let (_temp, source) = write_master("[[inn_usan]\nvalue = ");
    let err = source.load_master().unwrap_err();
    assert!(format!("{err:#}").contains("parsing"));
}

#[test]
fn test_describe_names_the_file() {
    let (_temp, source) = write_master(MASTER);
    assert!(source.describe().ends_with("avoids.toml"));
}
