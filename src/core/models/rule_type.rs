//! Avoid rule types
//!
//! Defines how an avoid string is compared against a candidate name.

use serde::{Deserialize, Serialize};

/// Matching strategy applied to an avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Name starts with the avoid
    Prefix,
    /// Avoid occurs strictly inside the name (not touching either end)
    Infix,
    /// Name ends with the avoid
    Suffix,
    /// Avoid occurs anywhere in the name
    Anywhere,
    /// Fuzzy string-compare family (exact, combo, shared letter runs)
    #[serde(alias = "string_compare", alias = "string_match")]
    NameMatch,
}

impl RuleType {
    /// All rule types in declaration order
    pub const ALL: [Self; 5] = [
        Self::Prefix,
        Self::Infix,
        Self::Suffix,
        Self::Anywhere,
        Self::NameMatch,
    ];

    /// Snake-case key used in data files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Infix => "infix",
            Self::Suffix => "suffix",
            Self::Anywhere => "anywhere",
            Self::NameMatch => "name_match",
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Ok(Self::Prefix),
            "infix" => Ok(Self::Infix),
            "suffix" => Ok(Self::Suffix),
            "anywhere" => Ok(Self::Anywhere),
            "name_match" | "string_compare" | "string_match" => Ok(Self::NameMatch),
            _ => Err(format!(
                "Invalid rule type: {s}. Use: prefix, infix, suffix, anywhere, name_match"
            )),
        }
    }
}
