//! Feature matching and confidence scoring for a single candidate.

use bookshelf_core::models::suggestion::{MAX_CONFIDENCE_SCORE, MatchResult};
use tracing::debug;

use crate::config::{AnalyzerConfig, MatchMode};
use crate::context::condition_context;
use crate::genetics::additional_info;
use crate::matching::contains;

/// Points added per matched feature.
pub const FEATURE_POINTS: u32 = 10;

/// Flat bonus when the phenotype names the condition verbatim.
pub const EXACT_NAME_BONUS: u32 = 20;

/// Results scoring below this are discarded.
pub const MIN_SCORE: u8 = 5;

/// Most evidence snippets kept per result.
pub const MAX_EVIDENCE: usize = 3;

/// Snippets longer than this (in chars) are cut and marked with `...`.
pub const SNIPPET_MAX_CHARS: usize = 200;

/// Whether `feature` is evidenced in `context_lower`.
///
/// The whole phrase matching wins outright. Otherwise at least half of the
/// feature's whitespace-separated words must occur individually; a
/// three-word feature therefore needs two.
pub fn feature_matches(feature: &str, context_lower: &str, mode: MatchMode) -> bool {
    if contains(context_lower, &feature.to_lowercase(), mode) {
        return true;
    }

    let words: Vec<&str> = feature.split_whitespace().collect();
    let matched = words
        .iter()
        .filter(|word| contains(context_lower, &word.to_lowercase(), mode))
        .count();
    2 * matched >= words.len()
}

/// The first context sentence containing `feature`, trimmed and truncated.
pub fn evidence_snippet(feature: &str, context: &str, mode: MatchMode) -> Option<String> {
    let needle = feature.to_lowercase();
    context
        .split('.')
        .find(|sentence| contains(&sentence.to_lowercase(), &needle, mode))
        .map(|sentence| truncate_snippet(sentence.trim()))
        .filter(|snippet| !snippet.is_empty())
}

/// Cut `sentence` to [`SNIPPET_MAX_CHARS`] chars plus `...` when longer.
pub fn truncate_snippet(sentence: &str) -> String {
    match sentence.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &sentence[..cut]),
        None => sentence.to_string(),
    }
}

/// Score one candidate condition against a phenotype.
///
/// Returns `None` when the condition has no context in the corpus or the
/// score stays below [`MIN_SCORE`].
pub fn score_condition(
    condition: &str,
    features: &[String],
    corpus: &str,
    phenotype: &str,
    config: &AnalyzerConfig,
) -> Option<MatchResult> {
    let mode = config.match_mode;
    let context = condition_context(condition, corpus, mode);
    if context.is_empty() {
        return None;
    }
    let context_lower = context.to_lowercase();

    let mut score = 0u32;
    let mut matching_features = Vec::new();
    let mut evidence = Vec::new();

    for feature in features {
        if !feature_matches(feature, &context_lower, mode) {
            continue;
        }
        matching_features.push(feature.clone());
        score += FEATURE_POINTS;
        if let Some(snippet) = evidence_snippet(feature, &context, mode) {
            evidence.push(snippet);
        }
    }

    if contains(&phenotype.to_lowercase(), &condition.to_lowercase(), mode) {
        score += EXACT_NAME_BONUS;
    }

    let confidence_score = score.min(u32::from(MAX_CONFIDENCE_SCORE)) as u8;
    if confidence_score < MIN_SCORE {
        debug!(condition, confidence_score, "condition below score floor");
        return None;
    }

    evidence.truncate(config.max_evidence);
    debug!(
        condition,
        confidence_score,
        matched = matching_features.len(),
        "condition scored"
    );

    Some(MatchResult {
        condition: condition.to_string(),
        confidence_score,
        matching_features,
        evidence,
        additional_info: additional_info(&context),
    })
}
