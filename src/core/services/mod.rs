//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`classifier`] - Turn free-text avoid entries into records
//! - [`matcher`] - Match avoid records against a name
//! - [`checker`] - Screen a batch of names and build the report
//! - [`repository`] - Hold the merged curated and user-defined avoids

pub mod checker;
pub mod classifier;
pub mod matcher;
pub mod repository;

pub use checker::NameChecker;
pub use classifier::{RuleClassifier, Signifiers};
pub use matcher::{Hit, Matcher};
pub use repository::AvoidRepository;
