//! Global configuration management
//!
//! Config is stored at `~/.namescreen/config.toml`. Every field is optional;
//! missing fields take the defaults below.
//!
//! ```toml
//! [matching]
//! fix_signifiers = ["-", "~"]
//! anywhere_signifiers = ["\"", "*"]
//! string_compare_minimum = 3
//!
//! [sources]
//! master_avoids = "/shared/naming/avoids.toml"
//! session_file = "/home/me/.namescreen/session.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::services::classifier::{
    DEFAULT_ANYWHERE_SIGNIFIERS, DEFAULT_FIX_SIGNIFIERS, Signifiers,
};
use crate::core::services::matcher::DEFAULT_STRING_COMPARE_MINIMUM;
use crate::core::services::{Matcher, NameChecker, RuleClassifier};
use crate::paths;

/// Global namescreen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Classification and matching parameters
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Data file locations
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Classification and matching parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Markers for prefix/suffix/infix entries
    pub fix_signifiers: Vec<char>,
    /// Markers for anywhere entries
    pub anywhere_signifiers: Vec<char>,
    /// Shortest shared letter run reported by fuzzy name matches
    pub string_compare_minimum: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fix_signifiers: DEFAULT_FIX_SIGNIFIERS.to_vec(),
            anywhere_signifiers: DEFAULT_ANYWHERE_SIGNIFIERS.to_vec(),
            string_compare_minimum: DEFAULT_STRING_COMPARE_MINIMUM,
        }
    }
}

impl MatchingConfig {
    /// Signifier sets for the classifier
    #[must_use]
    pub fn signifiers(&self) -> Signifiers {
        Signifiers {
            fix: self.fix_signifiers.clone(),
            anywhere: self.anywhere_signifiers.clone(),
        }
    }

    /// Classifier configured with these signifiers
    #[must_use]
    pub fn classifier(&self) -> RuleClassifier {
        RuleClassifier::new(self.signifiers())
    }

    /// Checker configured with this string-compare minimum
    #[must_use]
    pub fn checker(&self) -> NameChecker {
        NameChecker::new(Matcher::new(self.string_compare_minimum))
    }
}

/// Data file locations (defaults live under `~/.namescreen/`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Curated master avoid file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_avoids: Option<PathBuf>,
    /// Session file holding user avoids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl SourcesConfig {
    /// Effective master avoid path
    #[must_use]
    pub fn master_avoids_path(&self) -> PathBuf {
        self.master_avoids.clone().unwrap_or_else(paths::default_master_avoids)
    }

    /// Effective session file path
    #[must_use]
    pub fn session_file_path(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(paths::default_session_file)
    }
}

impl ScreenConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from a file, or defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
