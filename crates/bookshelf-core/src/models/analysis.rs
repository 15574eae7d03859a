use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::confidence::ConfidenceBand;
use super::suggestion::RankedSuggestion;

/// One phenotype analysis run against a stored document.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub document_id: Uuid,
    pub phenotype_description: String,
    pub analyzed_at: jiff::Timestamp,
    pub report_content: String,
}

/// A ranked suggestion as persisted.
///
/// `confidence_score` is re-derived from `confidence_level` through the
/// band reverse mapping, never copied from the raw analyzer score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredSuggestion {
    pub id: Uuid,
    pub analysis_id: Uuid,
    pub condition_name: String,
    pub confidence_level: String,
    pub confidence_score: u8,
    /// Comma-separated features.
    pub matching_features: String,
    /// Evidence snippets joined with "; ".
    pub evidence: String,
    pub additional_info: String,
}

impl StoredSuggestion {
    pub fn from_ranked(analysis_id: Uuid, suggestion: &RankedSuggestion) -> Self {
        let confidence_level = suggestion.confidence.label().to_string();
        Self {
            id: Uuid::new_v4(),
            analysis_id,
            condition_name: suggestion.condition.clone(),
            confidence_score: ConfidenceBand::proxy_for_label(&confidence_level),
            confidence_level,
            matching_features: suggestion.matching_features.join(", "),
            evidence: suggestion.evidence_text(),
            additional_info: suggestion.additional_info.clone(),
        }
    }
}

/// Row counts across the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreStatistics {
    pub total_documents: u64,
    pub total_analyses: u64,
    pub total_suggestions: u64,
}

/// How often a condition has been suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionFrequency {
    pub condition: String,
    pub count: u64,
}
