//! TOML-based master avoid source
//!
//! Implements the `AvoidSource` port trait using a master avoid file.

use std::path::{Path, PathBuf};

use crate::core::models::AvoidCollection;
use crate::core::ports::AvoidSource;

use super::parser::load_file;

/// Curated avoids backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlAvoidSource {
    path: PathBuf,
}

impl TomlAvoidSource {
    /// Create a source reading the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the master file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AvoidSource for TomlAvoidSource {
    fn load_master(&self) -> anyhow::Result<Option<AvoidCollection>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let file = load_file(&self.path)?;
        Ok(Some(file.into_collection(&self.path)?))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
