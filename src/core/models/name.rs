//! Candidate names
//!
//! Parsing of the name batch and the display casing of report rows.

use serde::{Deserialize, Serialize};

/// Split a block of text into candidate names
///
/// One name per line; surrounding whitespace is stripped, blank lines are
/// dropped and repeated names keep only their first occurrence.
#[must_use]
pub fn parse_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in text.lines() {
        let name = line.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// How names are displayed in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameCase {
    /// Keep the casing the user typed
    #[default]
    AsEntered,
    /// all lowercase
    Lower,
    /// ALL UPPERCASE
    Upper,
    /// First letter of each word capitalized
    Title,
}

impl NameCase {
    /// Re-case a name for display
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::AsEntered => name.to_string(),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Title => title_case(name),
        }
    }
}

impl std::str::FromStr for NameCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "as-entered" | "as_entered" | "none" => Ok(Self::AsEntered),
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            "title" => Ok(Self::Title),
            _ => Err(format!("Invalid case: {s}. Use: as-entered, lower, upper, title")),
        }
    }
}

fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
