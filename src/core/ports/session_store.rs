//! Session store port
//!
//! Defines the interface for persisting the user's avoid text between runs.

use super::super::models::UserAvoids;

/// Persistence of project and competitor avoid text
pub trait SessionStore: Send + Sync {
    /// Load saved avoid text (blank when nothing has been saved)
    fn load(&self) -> anyhow::Result<UserAvoids>;

    /// Replace the saved avoid text
    fn save(&self, avoids: &UserAvoids) -> anyhow::Result<()>;

    /// Forget the saved avoid text
    fn clear(&self) -> anyhow::Result<()>;
}
