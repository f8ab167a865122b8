//! Ignore list
//!
//! User-supplied substrings that exempt avoids from a check run.

use serde::{Deserialize, Serialize};

/// Literal substrings exempting avoids for a whole check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreList {
    entries: Vec<String>,
}

impl IgnoreList {
    /// Build from already-split entries (trimmed, blanks dropped)
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Parse comma-separated raw text, e.g. `"Dax, rel"`
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Whether an avoid with this value is exempt
    ///
    /// True when the value is contained in (or equal to) any entry,
    /// compared case-insensitively.
    #[must_use]
    pub fn excludes(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.entries.iter().any(|entry| entry.to_lowercase().contains(&value))
    }

    /// The entries
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether the list is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
