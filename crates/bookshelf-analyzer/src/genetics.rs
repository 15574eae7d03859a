use std::sync::LazyLock;

use regex::Regex;

/// Most distinct genetic findings listed in one summary.
pub const MAX_GENETIC_FINDINGS: usize = 3;

static GENETIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)mutations? in \w+",
        r"(?i)genes? \w+",
        r"(?i)chromosome \d+",
        r"(?i)FGFR\d+",
        r"(?i)autosomal \w+",
    ]
    .iter()
    .map(|source| Regex::new(source).expect("genetic pattern is valid"))
    .collect()
});

/// Summarize genetics mentions in a condition context.
///
/// Distinct matches are collected in pattern order and the first three are
/// listed, e.g. `Genetic factors: mutations in FGFR2, FGFR2, autosomal dominant`.
/// Returns an empty string when nothing matches.
pub fn additional_info(context: &str) -> String {
    let mut findings: Vec<&str> = Vec::new();
    for pattern in GENETIC_PATTERNS.iter() {
        for found in pattern.find_iter(context) {
            if !findings.contains(&found.as_str()) {
                findings.push(found.as_str());
            }
        }
    }

    if findings.is_empty() {
        return String::new();
    }
    findings.truncate(MAX_GENETIC_FINDINGS);
    format!("Genetic factors: {}", findings.join(", "))
}
