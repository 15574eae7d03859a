use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Vocabulary category a surfaced term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TermCategory {
    /// Condition-indicator vocabulary (skull and suture morphology).
    Indicator,
    /// Genetic markers and mechanisms.
    Genetic,
    /// Phenotype keywords.
    Phenotype,
    /// Syndrome names found by pattern rather than by list.
    Syndrome,
}

impl TermCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indicator => "indicator",
            Self::Genetic => "genetic",
            Self::Phenotype => "phenotype",
            Self::Syndrome => "syndrome",
        }
    }
}

impl fmt::Display for TermCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A term surfaced from a text, with its canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyTerm {
    pub category: TermCategory,
    pub term: String,
}

/// A key term persisted against a reference document.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalTerm {
    pub id: Uuid,
    pub document_id: Uuid,
    pub term: String,
    pub category: TermCategory,
    pub frequency: u32,
}
