use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::ConfidenceBand;

/// Highest score a match result can carry.
pub const MAX_CONFIDENCE_SCORE: u8 = 100;

/// One evaluated candidate condition, before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResult {
    pub condition: String,
    /// Always within `0..=100`.
    pub confidence_score: u8,
    pub matching_features: Vec<String>,
    /// At most three literal snippets from the reference text.
    pub evidence: Vec<String>,
    /// Genetics summary sentence, or empty.
    pub additional_info: String,
}

/// A ranked suggestion as presented to callers.
///
/// The band replaces the raw score on output. The raw score is kept on the
/// value for ordering and for callers that persist it, but it is never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedSuggestion {
    pub condition: String,
    pub confidence: ConfidenceBand,
    #[serde(skip)]
    pub score: u8,
    pub matching_features: Vec<String>,
    pub evidence: Vec<String>,
    pub additional_info: String,
}

impl From<MatchResult> for RankedSuggestion {
    fn from(result: MatchResult) -> Self {
        Self {
            condition: result.condition,
            confidence: ConfidenceBand::from_score(result.confidence_score),
            score: result.confidence_score,
            matching_features: result.matching_features,
            evidence: result.evidence,
            additional_info: result.additional_info,
        }
    }
}

impl RankedSuggestion {
    /// Evidence snippets joined the way reports and persisted rows show them.
    pub fn evidence_text(&self) -> String {
        self.evidence.join("; ")
    }
}
