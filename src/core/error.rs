//! Error types for screening operations
//!
//! Two kinds of failure cross the core boundary: input the user can fix,
//! and everything else.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the repository, classifier and checker boundary
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Input the user can correct (no names, no categories, nothing to save)
    #[error("{0}")]
    UserInput(String),

    /// Curated or session data could not be interpreted
    #[error("malformed avoid data in {}: {message}", path.display())]
    Source {
        /// File the data came from
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },
}

impl ScreenError {
    /// Create a user input error
    #[must_use]
    pub fn user_input(message: impl Into<String>) -> Self {
        Self::UserInput(message.into())
    }

    /// Whether the user can recover by changing their input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserInput(_))
    }
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, ScreenError>;
