//! Avoid records and collections
//!
//! An avoid declares: "a candidate name must not collide with this string
//! under this rule". Collections keep insertion order, which is the order
//! hits are reported in.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Category, RuleType};

/// Description attached to avoids entered by the user
pub const USER_DEFINED_DESCRIPTION: &str = "User Defined Avoid";

/// A single avoid string with its rule and provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvoidRecord {
    /// The avoid string, without any signifier markup
    pub value: String,

    /// How the value is matched against names
    pub rule_type: RuleType,

    /// Provenance, used for filtering and report columns
    pub category: Category,

    /// Free-form annotation (may be empty)
    #[serde(default)]
    pub description: String,
}

impl AvoidRecord {
    /// Create a new avoid record
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        rule_type: RuleType,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            rule_type,
            category,
            description: description.into(),
        }
    }

    /// Create a record entered by the user
    #[must_use]
    pub fn user_defined(value: impl Into<String>, rule_type: RuleType, category: Category) -> Self {
        Self::new(value, rule_type, category, USER_DEFINED_DESCRIPTION)
    }

    fn key(&self) -> (&str, RuleType, Category) {
        (self.value.as_str(), self.rule_type, self.category)
    }
}

/// Insertion-ordered set of avoid records
///
/// `(value, rule_type, category)` triples are unique once a collection has
/// been through [`AvoidCollection::merge`] or [`AvoidCollection::from_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvoidCollection {
    records: Vec<AvoidRecord>,
}

impl AvoidCollection {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a collection, collapsing duplicate triples (first occurrence wins)
    #[must_use]
    pub fn from_records(records: Vec<AvoidRecord>) -> Self {
        Self::new().merge(&Self { records })
    }

    /// Union with `additional`, dropping duplicate triples
    ///
    /// Records of `self` come first, then new records of `additional` in
    /// their own order. Neither input is modified.
    #[must_use]
    pub fn merge(&self, additional: &Self) -> Self {
        let mut seen = HashSet::new();
        let records = self
            .records
            .iter()
            .chain(&additional.records)
            .filter(|r| seen.insert(r.key()))
            .cloned()
            .collect();
        Self { records }
    }

    /// Records whose category is enabled, in original order
    #[must_use]
    pub fn filter_by_category(&self, enabled: &[Category]) -> Self {
        let records =
            self.records.iter().filter(|r| enabled.contains(&r.category)).cloned().collect();
        Self { records }
    }

    /// Iterate over the records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, AvoidRecord> {
        self.records.iter()
    }

    /// Number of records
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection has no records
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records as a slice
    #[must_use]
    pub fn records(&self) -> &[AvoidRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a AvoidCollection {
    type Item = &'a AvoidRecord;
    type IntoIter = std::slice::Iter<'a, AvoidRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<AvoidRecord> for AvoidCollection {
    fn from_iter<T: IntoIterator<Item = AvoidRecord>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

/// Column an avoid listing is sorted by
///
/// Sorting compares the displayed text, case-insensitively, and is stable so
/// ties keep collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidSort {
    /// The avoid string
    Value,
    /// The category label
    Category,
    /// The rule type
    Type,
}

impl AvoidSort {
    /// Sort records in place
    pub fn apply(self, records: &mut [&AvoidRecord]) {
        match self {
            Self::Value => records.sort_by_cached_key(|r| r.value.to_lowercase()),
            Self::Category => records.sort_by_cached_key(|r| r.category.label().to_lowercase()),
            Self::Type => records.sort_by_key(|r| r.rule_type.as_str()),
        }
    }
}

impl std::str::FromStr for AvoidSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "value" => Ok(Self::Value),
            "category" => Ok(Self::Category),
            "type" | "rule_type" | "rule-type" => Ok(Self::Type),
            _ => Err(format!("Invalid sort column: {s}. Use: value, category, type")),
        }
    }
}
