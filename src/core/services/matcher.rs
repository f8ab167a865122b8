//! Matching engine - decides whether an avoid collides with a name
//!
//! This module contains pure matching logic with no I/O dependencies.
//! All comparisons are case-insensitive and measured in characters.

use log::trace;

use crate::core::models::{AvoidCollection, AvoidRecord, Category, IgnoreList, RuleType};

/// Shortest shared letter run reported by the fuzzy name match
pub const DEFAULT_STRING_COMPARE_MINIMUM: usize = 3;

/// One avoid that matched one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Category of the matched avoid
    pub category: Category,
    /// Human-readable annotation, e.g. `Dax (prefix)`
    pub annotation: String,
}

/// Matches names against avoid records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    string_compare_minimum: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_STRING_COMPARE_MINIMUM)
    }
}

impl Matcher {
    /// Create a matcher; `string_compare_minimum` is clamped to at least 1
    #[must_use]
    pub fn new(string_compare_minimum: usize) -> Self {
        Self {
            string_compare_minimum: string_compare_minimum.max(1),
        }
    }

    /// Shortest letter run the fuzzy name match will report
    #[must_use]
    pub const fn string_compare_minimum(&self) -> usize {
        self.string_compare_minimum
    }

    /// Check if an avoid record matches a name
    #[must_use]
    pub fn matches(&self, name: &str, record: &AvoidRecord) -> bool {
        self.annotate(name, record).is_some()
    }

    /// Annotation for a matching record, or `None` when it does not match
    ///
    /// Rules:
    /// - `prefix` / `suffix` - name starts / ends with the value
    /// - `infix` - value occurs inside the name, away from both ends
    /// - `anywhere` - value occurs anywhere in the name
    /// - `name_match` - first success of: string match, combo, shared letter run
    #[must_use]
    pub fn annotate(&self, name: &str, record: &AvoidRecord) -> Option<String> {
        let value = record.value.as_str();
        if value.is_empty() {
            return None;
        }
        let n = name.trim().to_lowercase();
        let v = value.to_lowercase();

        let hit = match record.rule_type {
            RuleType::Prefix => n.starts_with(&v),
            RuleType::Suffix => n.ends_with(&v),
            RuleType::Infix => interior(&n).contains(&v),
            RuleType::Anywhere => n.contains(&v),
            RuleType::NameMatch => return self.name_match(&n, &v, value),
        };

        hit.then(|| format!("{value} ({})", record.rule_type))
    }

    /// Fuzzy cascade for `name_match` avoids; `n` and `v` are lowercased
    fn name_match(&self, n: &str, v: &str, value: &str) -> Option<String> {
        if n.is_empty() {
            return None;
        }

        if n == v || v.contains(n) {
            return Some(format!("{value} (string match)"));
        }

        let name_chars: Vec<char> = n.chars().collect();
        let value_chars: Vec<char> = v.chars().collect();

        if let Some((first, tail)) = combo(&name_chars, &value_chars) {
            return Some(format!("{value} ({first}--{tail})"));
        }

        for len in (self.string_compare_minimum..=name_chars.len()).rev() {
            for window in name_chars.windows(len) {
                let run: String = window.iter().collect();
                if v.contains(&run) {
                    return Some(format!("{value} (*{run}*)"));
                }
            }
        }

        None
    }

    /// All hits for one name, in collection order
    ///
    /// Records excluded by the ignore list are skipped before matching.
    #[must_use]
    pub fn hits(&self, name: &str, avoids: &AvoidCollection, ignore: &IgnoreList) -> Vec<Hit> {
        avoids
            .iter()
            .filter(|record| !ignore.excludes(&record.value))
            .filter_map(|record| {
                let annotation = self.annotate(name, record)?;
                trace!("{name}: {annotation} [{}]", record.category);
                Some(Hit {
                    category: record.category,
                    annotation,
                })
            })
            .collect()
    }
}

/// The name without its first and last character
fn interior(n: &str) -> String {
    let count = n.chars().count();
    if count < 3 {
        return String::new();
    }
    n.chars().skip(1).take(count - 2).collect()
}

/// Same first letter and same last three letters
fn combo(name: &[char], value: &[char]) -> Option<(char, String)> {
    if name.len() < 3 || value.len() < 3 {
        return None;
    }
    let name_tail = &name[name.len() - 3..];
    let value_tail = &value[value.len() - 3..];
    (name[0] == value[0] && name_tail == value_tail)
        .then(|| (name[0], name_tail.iter().collect()))
}
