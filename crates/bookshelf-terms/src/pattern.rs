//! Known syndrome-name pattern.
//!
//! Supplements the static lists with eponymous names such as
//! "Apert syndrome": one capitalized word followed by "syndrome".

use std::sync::LazyLock;

use regex::Regex;

static SYNDROME_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ [Ss]yndrome\b").expect("syndrome name pattern is valid")
});

/// All syndrome-name matches in `text`, left to right, duplicates kept.
pub fn find_syndrome_names(text: &str) -> Vec<String> {
    SYNDROME_NAME
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
