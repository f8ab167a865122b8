//! Tests for the avoid repository against mock sources

use namescreen::core::models::{AvoidCollection, Category, RuleType, UserAvoids};
use namescreen::core::services::{AvoidRepository, RuleClassifier};

use crate::common::{MockAvoidSource, avoid, curated};

#[test]
fn load_from_source() {
    let repo = AvoidRepository::load(&MockAvoidSource::with(curated())).unwrap();
    assert!(repo.has_master());
    assert_eq!(repo.avoids(), &curated());
}

#[test]
fn missing_source_is_empty_not_error() {
    let repo = AvoidRepository::load(&MockAvoidSource::missing()).unwrap();
    assert!(!repo.has_master());
    assert!(repo.avoids().is_empty());
}

#[test]
fn broken_source_is_error() {
    let err = AvoidRepository::load(&MockAvoidSource::broken()).unwrap_err();
    assert!(err.to_string().contains("unreadable"));
}

#[test]
fn user_avoids_append_after_curated() {
    let mut repo = AvoidRepository::load(&MockAvoidSource::with(curated())).unwrap();
    let added = repo
        .add_user_avoids(&RuleClassifier::default(), &UserAvoids::new("Vim-", "Holvira"))
        .unwrap();

    assert_eq!(added, 2);
    let values: Vec<_> = repo.avoids().iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, ["Dax", "rel", "xor", "orel", "Holvira", "Vim", "Holvira"]);
    assert_eq!(repo.avoids().iter().last().map(|r| r.category), Some(Category::Competitor));
}

#[test]
fn absorb_is_idempotent() {
    let mut repo = AvoidRepository::new(curated());
    assert_eq!(repo.absorb(&curated()), 0);
    assert_eq!(repo.avoids().len(), curated().len());
}

#[test]
fn absorb_keeps_first_description() {
    let mut repo = AvoidRepository::new(AvoidCollection::from_records(vec![avoid(
        "Dax",
        RuleType::Prefix,
        Category::InnUsan,
    )]));
    let mut other = avoid("Dax", RuleType::Prefix, Category::InnUsan);
    other.description = "later".to_string();

    assert_eq!(repo.absorb(&AvoidCollection::from_records(vec![other])), 0);
    assert_eq!(repo.avoids().records()[0].description, "");
}

#[test]
fn same_value_different_rule_is_distinct() {
    let mut repo = AvoidRepository::new(curated());
    let added = repo.absorb(&AvoidCollection::from_records(vec![avoid(
        "Dax",
        RuleType::Anywhere,
        Category::InnUsan,
    )]));
    assert_eq!(added, 1);
}

#[test]
fn search_by_category_leaves_collection_untouched() {
    let repo = AvoidRepository::new(curated());
    let linguistic = repo.search(Some(Category::Linguistic), None);
    assert_eq!(linguistic.len(), 2);
    assert_eq!(repo.avoids().len(), 5);
}

#[test]
fn search_by_value() {
    let repo = AvoidRepository::new(curated());
    let found: Vec<_> = repo.search(None, Some("OREL")).iter().map(|r| r.value.clone()).collect();
    assert_eq!(found, ["orel"]);
}
