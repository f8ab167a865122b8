//! Rule classifier service - turns free-text avoid entries into records
//!
//! Users mark the rule of an entry with signifier characters at its ends:
//!
//! - `Dal-` - prefix (a trailing marker: "names starting with Dal")
//! - `-bri` - suffix
//! - `-rex-` / `~rex~` - infix
//! - `*rex*` / `"rex"` - anywhere
//! - `Holvira` - no markers: fuzzy name match
//!
//! Pure logic, no I/O.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ScreenError};
use crate::core::models::{AvoidCollection, AvoidRecord, Category, RuleType, UserAvoids};

/// Characters marking prefix/suffix/infix entries
pub const DEFAULT_FIX_SIGNIFIERS: [char; 2] = ['-', '~'];

/// Characters marking anywhere entries
pub const DEFAULT_ANYWHERE_SIGNIFIERS: [char; 2] = ['"', '*'];

/// The two configured signifier sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signifiers {
    /// Prefix/suffix/infix markers
    pub fix: Vec<char>,
    /// Anywhere markers
    pub anywhere: Vec<char>,
}

impl Default for Signifiers {
    fn default() -> Self {
        Self {
            fix: DEFAULT_FIX_SIGNIFIERS.to_vec(),
            anywhere: DEFAULT_ANYWHERE_SIGNIFIERS.to_vec(),
        }
    }
}

impl Signifiers {
    fn is_fix(&self, c: Option<char>) -> bool {
        c.is_some_and(|c| self.fix.contains(&c))
    }

    fn is_anywhere(&self, c: Option<char>) -> bool {
        c.is_some_and(|c| self.anywhere.contains(&c))
    }

    fn is_any(&self, c: char) -> bool {
        self.fix.contains(&c) || self.anywhere.contains(&c)
    }
}

/// Classifies user-entered avoid text
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier {
    signifiers: Signifiers,
}

impl RuleClassifier {
    /// Create a classifier for the given signifier sets
    #[must_use]
    pub const fn new(signifiers: Signifiers) -> Self {
        Self { signifiers }
    }

    /// Rule type of a single entry, judged from its first and last characters
    ///
    /// Markers are inspected before stripping. A lone marker character is
    /// both first and last, so it classifies as infix.
    #[must_use]
    pub fn rule_type(&self, entry: &str) -> RuleType {
        let entry = entry.trim();
        let first = entry.chars().next();
        let last = entry.chars().next_back();
        let s = &self.signifiers;

        if s.is_fix(first) && s.is_fix(last) {
            RuleType::Infix
        } else if s.is_fix(last) {
            RuleType::Prefix
        } else if s.is_fix(first) {
            RuleType::Suffix
        } else if s.is_anywhere(first) && s.is_anywhere(last) {
            RuleType::Anywhere
        } else {
            RuleType::NameMatch
        }
    }

    /// Remove every signifier character, wherever it occurs
    #[must_use]
    pub fn strip(&self, entry: &str) -> String {
        let stripped: String = entry.chars().filter(|&c| !self.signifiers.is_any(c)).collect();
        stripped.trim().to_string()
    }

    /// Classify one entry, or `None` if nothing remains after stripping
    #[must_use]
    pub fn classify(&self, entry: &str) -> Option<(RuleType, String)> {
        let value = self.strip(entry);
        if value.is_empty() {
            return None;
        }
        Some((self.rule_type(entry), value))
    }

    /// Classify every line of a text block into records of one category
    #[must_use]
    pub fn parse_block(&self, text: &str, category: Category) -> Vec<AvoidRecord> {
        text.lines()
            .filter_map(|line| {
                let (rule_type, value) = self.classify(line)?;
                debug!("classified {:?} as {rule_type} ({category})", line.trim());
                Some(AvoidRecord::user_defined(value, rule_type, category))
            })
            .collect()
    }

    /// Classify the project and competitor blocks
    ///
    /// # Errors
    ///
    /// Returns a user input error if both blocks are blank.
    pub fn parse_user_avoids(&self, avoids: &UserAvoids) -> Result<AvoidCollection> {
        if avoids.is_blank() {
            return Err(ScreenError::user_input(
                "No project or competitor avoids entered. Enter at least one avoid per line.",
            ));
        }

        let mut records = self.parse_block(&avoids.project, Category::Project);
        records.extend(self.parse_block(&avoids.competitor, Category::Competitor));
        Ok(AvoidCollection::from_records(records))
    }
}
