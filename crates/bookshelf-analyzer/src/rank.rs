use bookshelf_core::models::suggestion::{MatchResult, RankedSuggestion};

/// Most suggestions returned from one analysis.
pub const MAX_SUGGESTIONS: usize = 5;

/// Order results by score, highest first, and keep the top `limit`.
///
/// The sort is stable, so equal scores keep their discovery order.
pub fn rank(mut results: Vec<MatchResult>, limit: usize) -> Vec<RankedSuggestion> {
    results.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
    results
        .into_iter()
        .take(limit)
        .map(RankedSuggestion::from)
        .collect()
}
