//! Centralized path definitions for namescreen
//!
//! This module provides a single source of truth for all filesystem paths
//! used by namescreen.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.namescreen/
//! ├── config.toml               # Signifiers, string-compare minimum, source paths
//! ├── avoids.toml               # Curated master avoid list (default location)
//! └── session.toml              # Saved project/competitor avoids
//! ```

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".namescreen";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default master avoid filename
const MASTER_AVOIDS_FILE: &str = "avoids.toml";

/// Default session filename
const SESSION_FILE: &str = "session.toml";

/// Get the global namescreen directory.
///
/// Returns `~/.namescreen/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.namescreen/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Default location of the curated master avoid list.
#[must_use]
pub fn default_master_avoids() -> PathBuf {
    global_config_dir().join(MASTER_AVOIDS_FILE)
}

/// Default location of the session file.
#[must_use]
pub fn default_session_file() -> PathBuf {
    global_config_dir().join(SESSION_FILE)
}
