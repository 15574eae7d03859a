//! Containment test shared by context location, feature matching,
//! evidence lookup, and the exact-name bonus.

use crate::config::MatchMode;

/// Whether `needle` occurs in `haystack` under `mode`.
///
/// Both arguments are expected to be lowercased already.
pub fn contains(haystack: &str, needle: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => haystack.contains(needle),
        MatchMode::WordBoundary => contains_bounded(haystack, needle),
    }
}

fn contains_bounded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();

        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }

        // Step one char so overlapping occurrences are still considered.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
