//! bookshelf-terms
//!
//! Static domain vocabulary. Pure data — no I/O.
//! Defines the indicator, genetic, and phenotype term lists and the
//! syndrome-name pattern used to surface key terms from reference text.
//! None of this feeds the confidence score.

pub mod dictionary;
pub mod pattern;
pub mod vocabularies;

use bookshelf_core::models::term::TermCategory;

/// Trait implemented by each static vocabulary list.
pub trait Vocabulary: Send + Sync {
    /// Category this list populates.
    fn category(&self) -> TermCategory;

    /// Human-readable name (e.g., "Craniofacial indicators").
    fn name(&self) -> &str;

    /// Terms in their canonical spelling.
    fn terms(&self) -> &[&'static str];
}

/// Return all registered vocabularies, in extraction order.
pub fn all_vocabularies() -> Vec<Box<dyn Vocabulary>> {
    vec![
        Box::new(vocabularies::indicator::CraniofacialIndicators),
        Box::new(vocabularies::genetic::GeneticMarkers),
        Box::new(vocabularies::phenotype::PhenotypeKeywords),
    ]
}

/// Look up a vocabulary by category.
pub fn get_vocabulary(category: TermCategory) -> Option<Box<dyn Vocabulary>> {
    all_vocabularies()
        .into_iter()
        .find(|v| v.category() == category)
}
