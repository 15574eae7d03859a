//! bookshelf-analyzer
//!
//! Rule-based phenotype-to-condition matching. Pure and synchronous — no I/O.
//! Discovers candidate conditions in reference text, matches phenotype
//! features against each candidate's context, scores, and ranks.

pub mod config;
pub mod context;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod features;
pub mod genetics;
pub mod images;
pub mod matching;
pub mod rank;
pub mod scoring;

pub use engine::Analyzer;
