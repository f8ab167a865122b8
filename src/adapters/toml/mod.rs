//! TOML-based avoid source and session store
//!
//! - [`parser`] - Read and deserialize master avoid files
//! - [`source`] - `AvoidSource` implementation
//! - [`session`] - `SessionStore` implementation

pub mod parser;
pub mod session;
pub mod source;

pub use parser::{AvoidEntry, MasterFile, load_file};
pub use session::{SESSION_SECTION, SessionFile, TomlSessionStore, join_entries, split_entries};
pub use source::TomlAvoidSource;
