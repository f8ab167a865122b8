//! Domain models for namescreen
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AvoidRecord`] - "Names must not collide with this string under this rule"
//! - [`AvoidCollection`] - Ordered, de-duplicated set of avoids
//! - [`AvoidSort`] - Sort column of an avoid listing
//! - [`RuleType`] - How an avoid is matched
//! - [`Category`] - Where an avoid came from
//! - [`IgnoreList`] - Substrings exempting avoids from a run
//! - [`ResultTable`] - The report of a check run

mod avoid;
mod category;
mod ignore;
mod name;
mod rule_type;
mod table;
mod user_avoids;

pub use avoid::{AvoidCollection, AvoidRecord, AvoidSort, USER_DEFINED_DESCRIPTION};
pub use category::Category;
pub use ignore::IgnoreList;
pub use name::{NameCase, parse_names};
pub use rule_type::RuleType;
pub use table::{NAME_COLUMN, NO_CONFLICTS, RESULT_COLUMN, ResultTable};
pub use user_avoids::UserAvoids;
