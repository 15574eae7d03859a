use std::sync::LazyLock;

use regex::Regex;

static FEATURE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;.]\s*").expect("feature delimiter pattern is valid"));

/// Split a phenotype description into lowercase feature phrases.
///
/// Splits on `,`, `;`, and `.`; segments are trimmed and empty ones
/// dropped. Order follows the description.
pub fn extract_features(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    FEATURE_DELIMITER
        .split(&lower)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
