//! TOML parser for master avoid files
//!
//! A master file holds one array of tables per curated category:
//!
//! ```toml
//! [[inn_usan]]
//! value = "mab"
//! type = "suffix"
//! description = "monoclonal antibodies"
//!
//! [[linguistic]]
//! value = "kak"
//! type = "anywhere"
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use crate::core::ScreenError;
use crate::core::models::{AvoidCollection, AvoidRecord, Category, RuleType};

/// A master avoid file
#[derive(Debug, Default, Deserialize)]
pub struct MasterFile {
    /// INN / USAN stems
    #[serde(default)]
    pub inn_usan: Vec<AvoidEntry>,

    /// Linguistic conflicts
    #[serde(default)]
    pub linguistic: Vec<AvoidEntry>,

    /// Market research hits
    #[serde(default)]
    pub market_research: Vec<AvoidEntry>,
}

/// One row of a master file
#[derive(Debug, Deserialize)]
pub struct AvoidEntry {
    /// The avoid string
    pub value: String,

    /// Rule type; rows without one are dropped
    #[serde(default, rename = "type")]
    pub rule_type: Option<String>,

    /// Optional annotation
    #[serde(default)]
    pub description: Option<String>,
}

impl MasterFile {
    /// Convert to records, in category order then row order
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Source`] if a row names an unknown rule type.
    pub fn into_collection(self, path: &Path) -> Result<AvoidCollection, ScreenError> {
        let sheets = Category::CURATED.into_iter().zip([
            self.inn_usan,
            self.linguistic,
            self.market_research,
        ]);

        let mut records = Vec::new();
        for (category, entries) in sheets {
            for entry in entries {
                let Some(rule_type) = entry.rule_type.as_deref().filter(|t| !t.trim().is_empty())
                else {
                    debug!("dropping {category} avoid {:?} without a rule type", entry.value);
                    continue;
                };
                let value = entry.value.trim();
                if value.is_empty() {
                    continue;
                }
                let rule_type: RuleType = rule_type.parse().map_err(|message| ScreenError::Source {
                    path: path.to_path_buf(),
                    message,
                })?;
                records.push(AvoidRecord::new(
                    value,
                    rule_type,
                    category,
                    entry.description.unwrap_or_default(),
                ));
            }
        }

        Ok(AvoidCollection::from_records(records))
    }
}

/// Load a master avoid file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<MasterFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: MasterFile =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(file)
}
