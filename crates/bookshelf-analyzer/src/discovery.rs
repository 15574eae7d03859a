//! Candidate condition discovery.
//!
//! A candidate is a capitalized phrase ending in a condition keyword, e.g.
//! "Apert syndrome" or "Sagittal craniosynostosis". The phrase part may span
//! several words and line breaks, so discovery is deliberately noisy; the
//! scorer filters what has no feature overlap.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Candidates this short (in chars, after trimming) are dropped as noise.
pub const MIN_CANDIDATE_CHARS: usize = 5;

/// Naming-convention rules, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionRule {
    Syndrome,
    Craniosynostosis,
    Disorder,
    Disease,
}

static RULE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ConditionRule::ALL.map(|rule| {
        Regex::new(rule.pattern_source()).expect("condition rule pattern is valid")
    })
});

impl ConditionRule {
    pub const ALL: [ConditionRule; 4] = [
        ConditionRule::Syndrome,
        ConditionRule::Craniosynostosis,
        ConditionRule::Disorder,
        ConditionRule::Disease,
    ];

    fn pattern_source(&self) -> &'static str {
        match self {
            Self::Syndrome => r"\b[A-Z][a-zA-Z\s]+ [Ss]yndrome\b",
            Self::Craniosynostosis => r"\b[A-Z][a-zA-Z\s]+ craniosynostosis\b",
            Self::Disorder => r"\b[A-Z][a-zA-Z\s]+ disorder\b",
            Self::Disease => r"\b[A-Z][a-zA-Z\s]+ disease\b",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Syndrome => 0,
            Self::Craniosynostosis => 1,
            Self::Disorder => 2,
            Self::Disease => 3,
        }
    }

    pub fn pattern(&self) -> &'static Regex {
        &RULE_PATTERNS[self.index()]
    }

    /// Raw matches for this rule, left to right.
    pub fn find_all(self, text: &str) -> impl Iterator<Item = &str> {
        self.pattern().find_iter(text).map(|m| m.as_str())
    }
}

/// Discover candidate condition names in `corpus`.
///
/// Names are trimmed, de-duplicated by exact equality, and returned in
/// first-discovered order: rule order first, then position in the text.
pub fn discover_conditions(corpus: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for rule in ConditionRule::ALL {
        for raw in rule.find_all(corpus) {
            let name = raw.trim();
            if name.chars().count() <= MIN_CANDIDATE_CHARS {
                continue;
            }
            if seen.insert(name) {
                candidates.push(name.to_string());
            }
        }
    }

    debug!(candidates = candidates.len(), "condition discovery complete");
    candidates
}
