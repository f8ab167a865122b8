//! Avoid source port
//!
//! Defines the interface for loading the curated master avoid list.

use super::super::models::AvoidCollection;

/// Supplier of curated avoids (INN/USAN, linguistic, market research)
///
/// Implementations read from whatever backs the curated list (TOML files,
/// spreadsheets exported to TOML, databases).
pub trait AvoidSource: Send + Sync {
    /// Load all curated avoids
    ///
    /// Returns `Ok(None)` when the source cannot be located. Rows without a
    /// rule type are dropped silently.
    fn load_master(&self) -> anyhow::Result<Option<AvoidCollection>>;

    /// Human-readable description of the source, for logs
    fn describe(&self) -> String;
}
