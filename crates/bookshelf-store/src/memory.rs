use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use bookshelf_core::models::analysis::{
    AnalysisRecord, ConditionFrequency, StoreStatistics, StoredSuggestion,
};
use bookshelf_core::models::document::{DocumentRecord, NewDocument, TextStats};
use bookshelf_core::models::suggestion::RankedSuggestion;
use bookshelf_core::models::term::{KeyTerm, MedicalTerm};
use tracing::info;
use uuid::Uuid;

use crate::error::StoreError;
use crate::snapshot::Snapshot;
use crate::store::AnalysisStore;

/// An [`AnalysisStore`] held in memory, optionally loaded from and saved
/// to a JSON snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let snapshot = Snapshot::read(path)?;
        info!(
            path = %path.display(),
            documents = snapshot.documents.len(),
            analyses = snapshot.analyses.len(),
            "store loaded"
        );
        Ok(Self {
            state: RwLock::new(snapshot),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        state.write(path)?;
        info!(path = %path.display(), "store saved");
        Ok(())
    }
}

/// Newest first. Records are appended in insertion order, so reversing
/// before the stable sort puts later inserts first among equal timestamps.
fn newest_first<T>(
    records: impl DoubleEndedIterator<Item = T>,
    timestamp: impl Fn(&T) -> jiff::Timestamp,
) -> Vec<T> {
    let mut sorted: Vec<T> = records.rev().collect();
    sorted.sort_by_key(|record| std::cmp::Reverse(timestamp(record)));
    sorted
}

impl AnalysisStore for MemoryStore {
    fn store_document(&self, document: NewDocument) -> Result<DocumentRecord, StoreError> {
        let stats = TextStats::measure(&document.text_content);
        let record = DocumentRecord {
            id: Uuid::new_v4(),
            filename: document.filename,
            file_size: document.file_size,
            uploaded_at: jiff::Timestamp::now(),
            text_content: document.text_content,
            image_count: document.image_count,
            word_count: stats.word_count,
            character_count: stats.character_count,
        };

        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.documents.push(record.clone());
        info!(id = %record.id, filename = %record.filename, "document stored");
        Ok(record)
    }

    fn store_analysis(
        &self,
        document_id: Uuid,
        phenotype: &str,
        suggestions: &[RankedSuggestion],
        report: &str,
    ) -> Result<AnalysisRecord, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        if !state.documents.iter().any(|d| d.id == document_id) {
            return Err(StoreError::DocumentNotFound { id: document_id });
        }

        let record = AnalysisRecord {
            id: Uuid::new_v4(),
            document_id,
            phenotype_description: phenotype.to_string(),
            analyzed_at: jiff::Timestamp::now(),
            report_content: report.to_string(),
        };
        state.suggestions.extend(
            suggestions
                .iter()
                .map(|s| StoredSuggestion::from_ranked(record.id, s)),
        );
        state.analyses.push(record.clone());

        info!(
            id = %record.id,
            %document_id,
            suggestions = suggestions.len(),
            "analysis stored"
        );
        Ok(record)
    }

    fn store_terms(
        &self,
        document_id: Uuid,
        terms: &[KeyTerm],
    ) -> Result<Vec<MedicalTerm>, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        if !state.documents.iter().any(|d| d.id == document_id) {
            return Err(StoreError::DocumentNotFound { id: document_id });
        }

        let records: Vec<MedicalTerm> = terms
            .iter()
            .map(|t| MedicalTerm {
                id: Uuid::new_v4(),
                document_id,
                term: t.term.clone(),
                category: t.category,
                frequency: 1,
            })
            .collect();
        state.terms.extend(records.iter().cloned());
        Ok(records)
    }

    fn recent_documents(&self, limit: usize) -> Result<Vec<DocumentRecord>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut documents = newest_first(state.documents.iter().cloned(), |d| d.uploaded_at);
        documents.truncate(limit);
        Ok(documents)
    }

    fn analyses_for_document(
        &self,
        document_id: Uuid,
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        let matching: Vec<AnalysisRecord> = state
            .analyses
            .iter()
            .filter(|a| a.document_id == document_id)
            .cloned()
            .collect();
        Ok(newest_first(matching.into_iter(), |a| a.analyzed_at))
    }

    fn analysis_with_suggestions(
        &self,
        analysis_id: Uuid,
    ) -> Result<Option<(AnalysisRecord, Vec<StoredSuggestion>)>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        let Some(analysis) = state.analyses.iter().find(|a| a.id == analysis_id) else {
            return Ok(None);
        };
        let suggestions = state
            .suggestions
            .iter()
            .filter(|s| s.analysis_id == analysis_id)
            .cloned()
            .collect();
        Ok(Some((analysis.clone(), suggestions)))
    }

    fn search_analyses(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        let needle = term.to_lowercase();
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        let matching: Vec<AnalysisRecord> = state
            .analyses
            .iter()
            .filter(|a| a.phenotype_description.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let mut found = newest_first(matching.into_iter(), |a| a.analyzed_at);
        found.truncate(limit);
        Ok(found)
    }

    fn common_conditions(&self, limit: usize) -> Result<Vec<ConditionFrequency>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for suggestion in &state.suggestions {
            *counts.entry(suggestion.condition_name.as_str()).or_default() += 1;
        }

        let mut frequencies: Vec<ConditionFrequency> = counts
            .into_iter()
            .map(|(condition, count)| ConditionFrequency {
                condition: condition.to_string(),
                count,
            })
            .collect();
        frequencies.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.condition.cmp(&b.condition))
        });
        frequencies.truncate(limit);
        Ok(frequencies)
    }

    fn statistics(&self) -> Result<StoreStatistics, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(StoreStatistics {
            total_documents: state.documents.len() as u64,
            total_analyses: state.analyses.len() as u64,
            total_suggestions: state.suggestions.len() as u64,
        })
    }
}
