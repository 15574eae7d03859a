use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::rank::MAX_SUGGESTIONS;
use crate::scoring::MAX_EVIDENCE;

/// How a needle must occur in a haystack to count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain case-insensitive substring containment. "ear" is found in
    /// "hearing".
    #[default]
    Substring,
    /// Occurrences flanked by alphanumeric characters do not count.
    WordBoundary,
}

/// Tunables for an [`crate::Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub match_mode: MatchMode,
    pub max_suggestions: usize,
    pub max_evidence: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            max_suggestions: MAX_SUGGESTIONS,
            max_evidence: MAX_EVIDENCE,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if !(1..=MAX_SUGGESTIONS).contains(&self.max_suggestions) {
            return Err(AnalyzerError::InvalidSuggestionLimit {
                value: self.max_suggestions,
                max: MAX_SUGGESTIONS,
            });
        }
        if !(1..=MAX_EVIDENCE).contains(&self.max_evidence) {
            return Err(AnalyzerError::InvalidEvidenceLimit {
                value: self.max_evidence,
                max: MAX_EVIDENCE,
            });
        }
        Ok(())
    }
}
