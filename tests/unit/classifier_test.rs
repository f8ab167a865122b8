//! Tests for the rule classifier
//!
//! Free-text avoid entries become typed records according to their
//! signifier markers.

use namescreen::core::models::{Category, RuleType, UserAvoids};
use namescreen::core::services::{RuleClassifier, Signifiers};

#[test]
fn prefix_suffix_asymmetry() {
    let classifier = RuleClassifier::default();
    assert_eq!(classifier.classify("Dal-"), Some((RuleType::Prefix, "Dal".to_string())));
    assert_eq!(classifier.classify("-bri"), Some((RuleType::Suffix, "bri".to_string())));
}

#[test]
fn anywhere_markers() {
    let classifier = RuleClassifier::default();
    assert_eq!(classifier.classify("\"rex\""), Some((RuleType::Anywhere, "rex".to_string())));
    assert_eq!(classifier.classify("*rex*"), Some((RuleType::Anywhere, "rex".to_string())));
}

#[test]
fn fix_markers_win_over_anywhere_markers() {
    let classifier = RuleClassifier::default();
    assert_eq!(classifier.classify("*rex-"), Some((RuleType::Prefix, "rex".to_string())));
    assert_eq!(classifier.classify("-rex*"), Some((RuleType::Suffix, "rex".to_string())));
}

#[test]
fn markers_stripped_everywhere() {
    let classifier = RuleClassifier::default();
    assert_eq!(
        classifier.classify("Hol-vi*ra"),
        Some((RuleType::NameMatch, "Holvira".to_string()))
    );
}

#[test]
fn project_and_competitor_blocks() {
    let avoids = RuleClassifier::default()
        .parse_user_avoids(&UserAvoids::new("Dal-\n\n  -bri  \n*rex*\n-xor-", "Holvira\nDaxorel"))
        .unwrap();

    let got: Vec<_> = avoids
        .iter()
        .map(|r| (r.value.as_str(), r.rule_type, r.category))
        .collect();
    assert_eq!(
        got,
        [
            ("Dal", RuleType::Prefix, Category::Project),
            ("bri", RuleType::Suffix, Category::Project),
            ("rex", RuleType::Anywhere, Category::Project),
            ("xor", RuleType::Infix, Category::Project),
            ("Holvira", RuleType::NameMatch, Category::Competitor),
            ("Daxorel", RuleType::NameMatch, Category::Competitor),
        ]
    );
}

#[test]
fn duplicates_collapse() {
    let avoids = RuleClassifier::default()
        .parse_user_avoids(&UserAvoids::new("Dal-\nDal-\n~Dal~", ""))
        .unwrap();
    assert_eq!(avoids.len(), 2);
}

#[test]
fn only_competitor_text_is_enough() {
    let avoids =
        RuleClassifier::default().parse_user_avoids(&UserAvoids::new("", "Holvira")).unwrap();
    assert_eq!(avoids.len(), 1);
}

#[test]
fn both_blocks_blank_is_user_error() {
    let err =
        RuleClassifier::default().parse_user_avoids(&UserAvoids::new("", " \n ")).unwrap_err();
    assert!(err.is_user_error());
}

#[test]
fn alternate_signifiers() {
    let classifier = RuleClassifier::new(Signifiers {
        fix: vec!['_'],
        anywhere: vec!['\''],
    });
    assert_eq!(classifier.classify("_rex_"), Some((RuleType::Infix, "rex".to_string())));
    assert_eq!(classifier.classify("'rex'"), Some((RuleType::Anywhere, "rex".to_string())));
    assert_eq!(classifier.classify("*rex*"), Some((RuleType::NameMatch, "*rex*".to_string())));
}
