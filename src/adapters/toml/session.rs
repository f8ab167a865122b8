//! TOML session store
//!
//! Persists the project and competitor avoid text in one section of a
//! flat key-value file:
//!
//! ```toml
//! [PROJ_COMP_AVOIDS]
//! project_avoids = "Dal-,-bri,*rex*"
//! competitor_avoids = "Holvira"
//! ```
//!
//! Entries are joined with commas, so an entry that itself contains a comma
//! comes back split in two.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::ScreenError;
use crate::core::models::UserAvoids;
use crate::core::ports::SessionStore;

/// Section holding the saved avoid text
pub const SESSION_SECTION: &str = "PROJ_COMP_AVOIDS";

/// On-disk layout of the session file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionFile {
    /// Saved avoid text
    #[serde(rename = "PROJ_COMP_AVOIDS", default)]
    pub avoids: SessionAvoids,
}

/// The two flat fields of the session section
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionAvoids {
    /// Comma-joined project avoids
    #[serde(default)]
    pub project_avoids: String,

    /// Comma-joined competitor avoids
    #[serde(default)]
    pub competitor_avoids: String,
}

/// Join newline-separated entries with commas (blank lines dropped)
#[must_use]
pub fn join_entries(text: &str) -> String {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(",")
}

/// Split comma-joined entries back into lines
#[must_use]
pub fn split_entries(raw: &str) -> String {
    raw.split(',').map(str::trim).filter(|e| !e.is_empty()).collect::<Vec<_>>().join("\n")
}

/// Session store backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlSessionStore {
    path: PathBuf,
}

impl TomlSessionStore {
    /// Create a store at the given path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the session file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for TomlSessionStore {
    fn load(&self) -> anyhow::Result<UserAvoids> {
        if !self.path.exists() {
            return Ok(UserAvoids::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let file: SessionFile = toml::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(UserAvoids::new(
            split_entries(&file.avoids.project_avoids),
            split_entries(&file.avoids.competitor_avoids),
        ))
    }

    fn save(&self, avoids: &UserAvoids) -> anyhow::Result<()> {
        if avoids.is_blank() {
            return Err(ScreenError::user_input(
                "Nothing to save. Enter project or competitor avoids first.",
            )
            .into());
        }

        let file = SessionFile {
            avoids: SessionAvoids {
                project_avoids: join_entries(&avoids.project),
                competitor_avoids: join_entries(&avoids.competitor),
            },
        };
        let content = format!("# namescreen session\n\n{}", toml::to_string(&file)?);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        info!("Saved user avoids to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("removing {}", self.path.display()))?;
        }
        Ok(())
    }
}
