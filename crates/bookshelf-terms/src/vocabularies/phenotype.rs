use bookshelf_core::models::term::TermCategory;

use crate::Vocabulary;

pub struct PhenotypeKeywords;

impl Vocabulary for PhenotypeKeywords {
    fn category(&self) -> TermCategory {
        TermCategory::Phenotype
    }

    fn name(&self) -> &str {
        "Phenotype keywords"
    }

    fn terms(&self) -> &[&'static str] {
        &[
            "developmental delay",
            "hearing loss",
            "intellectual disability",
            "growth retardation",
            "cardiac",
            "skeletal",
            "facial",
            "limb",
        ]
    }
}
