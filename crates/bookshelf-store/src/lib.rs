//! bookshelf-store
//!
//! Persistence for documents, analyses, suggestions, and key terms.
//! Defines the [`store::AnalysisStore`] interface and an in-memory
//! implementation that snapshots to a JSON file.

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod store;
