use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("max_suggestions must be between 1 and {max}, got {value}")]
    InvalidSuggestionLimit { value: usize, max: usize },

    #[error("max_evidence must be between 1 and {max}, got {value}")]
    InvalidEvidenceLimit { value: usize, max: usize },
}
