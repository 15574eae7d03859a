//! bookshelf-core
//!
//! Pure domain types shared by the analyzer, report, and store crates.
//! No I/O — this is the shared vocabulary of the Bookshelf system.

pub mod error;
pub mod models;
