//! namescreen - A CLI tool to screen proposed product names against curated
//! avoid lists
//!
//! Names are checked against regulatory stems, linguistic conflicts, market
//! research hits, and project or competitor avoids, each under its own
//! matching rule.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use namescreen::core::ScreenError;

/// Main entry point for the namescreen CLI
///
/// Input errors exit with status 2, anything unexpected with status 1.
fn main() {
    if let Err(err) = cli::run() {
        let user_error = err
            .chain()
            .find_map(|e| e.downcast_ref::<ScreenError>())
            .is_some_and(ScreenError::is_user_error);

        if user_error {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
        eprintln!("unexpected error: {err:#}");
        std::process::exit(1);
    }
}
