//! Core domain logic for namescreen
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`AvoidRecord`, `Category`, `RuleType`, `ResultTable`)
//! - `services/` - Classification, matching and check orchestration
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - User-input vs unexpected failures

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::ScreenError;
