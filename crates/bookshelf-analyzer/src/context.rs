use crate::config::MatchMode;
use crate::matching::contains;

/// Gather every corpus sentence mentioning `condition` into one string.
///
/// Sentences are split on `.`, trimmed, and joined with a single space.
/// Returns an empty string when the condition is never mentioned.
pub fn condition_context(condition: &str, corpus: &str, mode: MatchMode) -> String {
    let needle = condition.to_lowercase();
    corpus
        .split('.')
        .filter(|sentence| contains(&sentence.to_lowercase(), &needle, mode))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}
