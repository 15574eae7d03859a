use std::collections::{BTreeMap, BTreeSet};

use bookshelf_core::models::term::{KeyTerm, TermCategory};

use crate::pattern::find_syndrome_names;
use crate::{Vocabulary, all_vocabularies};

/// An immutable set of lowercase terms for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    fn from_vocabulary(vocabulary: &dyn Vocabulary) -> Self {
        Self {
            terms: vocabulary.terms().iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The static term dictionary, built once and never mutated.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    sets: BTreeMap<TermCategory, TermSet>,
    /// Canonical spellings, in vocabulary order.
    canonical: Vec<(TermCategory, &'static str)>,
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl TermDictionary {
    pub fn new() -> Self {
        let mut sets = BTreeMap::new();
        let mut canonical = Vec::new();
        for vocabulary in all_vocabularies() {
            sets.insert(
                vocabulary.category(),
                TermSet::from_vocabulary(vocabulary.as_ref()),
            );
            canonical.extend(
                vocabulary
                    .terms()
                    .iter()
                    .map(|term| (vocabulary.category(), *term)),
            );
        }
        Self { sets, canonical }
    }

    /// The lowercase term set for a category.
    ///
    /// `TermCategory::Syndrome` is pattern-based and has no static set.
    pub fn lookup(&self, category: TermCategory) -> Option<&TermSet> {
        self.sets.get(&category)
    }

    /// Surface every dictionary term present in `text` (case-insensitive
    /// substring) plus every syndrome name matched by pattern.
    ///
    /// Sorted by category then term; each (category, term) pair appears once.
    pub fn extract_categorized(&self, text: &str) -> Vec<KeyTerm> {
        let lower = text.to_lowercase();
        let mut found: BTreeSet<KeyTerm> = self
            .canonical
            .iter()
            .filter(|(_, term)| lower.contains(&term.to_lowercase()))
            .map(|(category, term)| KeyTerm {
                category: *category,
                term: term.to_string(),
            })
            .collect();

        found.extend(find_syndrome_names(text).into_iter().map(|term| KeyTerm {
            category: TermCategory::Syndrome,
            term,
        }));

        found.into_iter().collect()
    }

    /// The de-categorized view of [`Self::extract_categorized`].
    pub fn extract_key_terms(&self, text: &str) -> BTreeSet<String> {
        self.extract_categorized(text)
            .into_iter()
            .map(|key_term| key_term.term)
            .collect()
    }
}
