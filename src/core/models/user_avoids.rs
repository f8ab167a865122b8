//! User-entered avoid text
//!
//! The two free-text blocks a user maintains per session: project avoids
//! and competitor names, one entry per line.

use serde::{Deserialize, Serialize};

/// Project and competitor avoid text, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAvoids {
    /// Project avoids with signifier markup (e.g. `Dal-`, `-bri`, `*rex*`)
    pub project: String,
    /// Competitor names
    pub competitor: String,
}

impl UserAvoids {
    /// Create from the two text blocks
    #[must_use]
    pub fn new(project: impl Into<String>, competitor: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            competitor: competitor.into(),
        }
    }

    /// Whether both blocks are blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.project.trim().is_empty() && self.competitor.trim().is_empty()
    }
}
