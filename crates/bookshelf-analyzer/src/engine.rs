use std::collections::BTreeSet;

use bookshelf_core::models::suggestion::{MatchResult, RankedSuggestion};
use bookshelf_core::models::term::KeyTerm;
use bookshelf_terms::dictionary::TermDictionary;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::discovery::discover_conditions;
use crate::error::AnalyzerError;
use crate::features::extract_features;
use crate::rank::rank;
use crate::scoring::score_condition;

/// A stateless analysis engine.
///
/// Holds only the immutable term dictionary and its config, so one value can
/// be shared across threads and every call with equal inputs returns equal
/// output.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    dictionary: TermDictionary,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Self {
            dictionary: TermDictionary::new(),
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    /// Vocabulary present in `text`, for reporting and indexing.
    pub fn extract_key_terms(&self, text: &str) -> BTreeSet<String> {
        self.dictionary.extract_key_terms(text)
    }

    pub fn extract_categorized_terms(&self, text: &str) -> Vec<KeyTerm> {
        self.dictionary.extract_categorized(text)
    }

    /// Every accepted match result, unsorted and uncapped, in discovery order.
    pub fn evaluate(&self, phenotype: &str, corpus: &str) -> Vec<MatchResult> {
        let features = extract_features(phenotype);
        let candidates = discover_conditions(corpus);

        info!(
            candidates = candidates.len(),
            features = features.len(),
            corpus_len = corpus.len(),
            "analyzing phenotype"
        );

        candidates
            .iter()
            .filter_map(|condition| {
                score_condition(condition, &features, corpus, phenotype, &self.config)
            })
            .collect()
    }

    /// Ranked suggestions for `phenotype` against `corpus`.
    ///
    /// An empty corpus, an empty phenotype, or no candidate reaching the
    /// score floor all yield an empty list.
    pub fn analyze_phenotype(&self, phenotype: &str, corpus: &str) -> Vec<RankedSuggestion> {
        let results = self.evaluate(phenotype, corpus);
        let accepted = results.len();
        let suggestions = rank(results, self.config.max_suggestions);

        info!(
            accepted,
            returned = suggestions.len(),
            "phenotype analysis complete"
        );
        suggestions
    }

    pub fn analyze_images<T: AsRef<[u8]>>(&self, images: &[T]) -> Vec<String> {
        crate::images::analyze_images(images)
    }
}
