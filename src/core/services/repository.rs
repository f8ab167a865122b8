//! Avoid repository - owns the merged set of curated and user avoids
//!
//! The repository is the only place the master collection changes. Every
//! change goes through [`AvoidCollection::merge`], so earlier records always
//! win over later duplicates.

use log::{info, warn};

use super::classifier::RuleClassifier;
use crate::core::error::Result;
use crate::core::models::{AvoidCollection, AvoidRecord, Category, UserAvoids};
use crate::core::ports::AvoidSource;

/// In-memory avoid collection for a session
#[derive(Debug, Clone, Default)]
pub struct AvoidRepository {
    avoids: AvoidCollection,
    master_loaded: bool,
}

impl AvoidRepository {
    /// Create a repository around an existing collection
    #[must_use]
    pub const fn new(avoids: AvoidCollection) -> Self {
        Self {
            avoids,
            master_loaded: false,
        }
    }

    /// Initialize from the curated master source
    ///
    /// A source that cannot be located leaves the repository empty; only
    /// malformed data or I/O failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the source exists but cannot be read.
    pub fn load(source: &dyn AvoidSource) -> anyhow::Result<Self> {
        match source.load_master()? {
            Some(avoids) => {
                info!("Loaded {} curated avoids from {}", avoids.len(), source.describe());
                Ok(Self {
                    avoids,
                    master_loaded: true,
                })
            },
            None => {
                warn!("Master avoid source not found: {}", source.describe());
                Ok(Self::default())
            },
        }
    }

    /// Whether curated avoids were loaded
    #[must_use]
    pub const fn has_master(&self) -> bool {
        self.master_loaded
    }

    /// The full collection
    #[must_use]
    pub const fn avoids(&self) -> &AvoidCollection {
        &self.avoids
    }

    /// Merge additional records into the collection
    ///
    /// Returns how many records were new.
    pub fn absorb(&mut self, additional: &AvoidCollection) -> usize {
        let before = self.avoids.len();
        self.avoids = self.avoids.merge(additional);
        self.avoids.len() - before
    }

    /// Classify user text and merge the result
    ///
    /// On error the collection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a user input error if both text blocks are blank.
    pub fn add_user_avoids(
        &mut self,
        classifier: &RuleClassifier,
        user: &UserAvoids,
    ) -> Result<usize> {
        let parsed = classifier.parse_user_avoids(user)?;
        Ok(self.absorb(&parsed))
    }

    /// Browse records by category and a case-insensitive search over value
    /// and description
    #[must_use]
    pub fn search(&self, category: Option<Category>, needle: Option<&str>) -> Vec<&AvoidRecord> {
        let needle = needle.map(str::to_lowercase).filter(|n| !n.is_empty());
        self.avoids
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .filter(|r| {
                needle.as_deref().is_none_or(|n| {
                    r.value.to_lowercase().contains(n) || r.description.to_lowercase().contains(n)
                })
            })
            .collect()
    }
}
