use bookshelf_core::models::analysis::{
    AnalysisRecord, ConditionFrequency, StoreStatistics, StoredSuggestion,
};
use bookshelf_core::models::document::{DocumentRecord, NewDocument};
use bookshelf_core::models::suggestion::RankedSuggestion;
use bookshelf_core::models::term::{KeyTerm, MedicalTerm};
use uuid::Uuid;

use crate::error::StoreError;

/// Durable storage for analysis history, keyed by opaque UUIDs.
///
/// Listing operations return newest records first.
pub trait AnalysisStore: Send + Sync {
    fn store_document(&self, document: NewDocument) -> Result<DocumentRecord, StoreError>;

    /// Persist an analysis and its ranked suggestions.
    ///
    /// Each suggestion's stored score is the reverse-mapped proxy of its
    /// confidence band.
    fn store_analysis(
        &self,
        document_id: Uuid,
        phenotype: &str,
        suggestions: &[RankedSuggestion],
        report: &str,
    ) -> Result<AnalysisRecord, StoreError>;

    fn store_terms(
        &self,
        document_id: Uuid,
        terms: &[KeyTerm],
    ) -> Result<Vec<MedicalTerm>, StoreError>;

    fn recent_documents(&self, limit: usize) -> Result<Vec<DocumentRecord>, StoreError>;

    fn analyses_for_document(
        &self,
        document_id: Uuid,
    ) -> Result<Vec<AnalysisRecord>, StoreError>;

    fn analysis_with_suggestions(
        &self,
        analysis_id: Uuid,
    ) -> Result<Option<(AnalysisRecord, Vec<StoredSuggestion>)>, StoreError>;

    /// Case-insensitive substring search over phenotype descriptions.
    fn search_analyses(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<AnalysisRecord>, StoreError>;

    /// Most frequently suggested conditions; ties ordered by name.
    fn common_conditions(&self, limit: usize) -> Result<Vec<ConditionFrequency>, StoreError>;

    fn statistics(&self) -> Result<StoreStatistics, StoreError>;
}
