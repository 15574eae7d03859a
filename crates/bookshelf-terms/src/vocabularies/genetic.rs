use bookshelf_core::models::term::TermCategory;

use crate::Vocabulary;

/// Genes and mechanisms reported in the craniosynostosis literature.
pub struct GeneticMarkers;

impl Vocabulary for GeneticMarkers {
    fn category(&self) -> TermCategory {
        TermCategory::Genetic
    }

    fn name(&self) -> &str {
        "Genetic markers"
    }

    fn terms(&self) -> &[&'static str] {
        &[
            "mutation",
            "gene",
            "FGFR1",
            "FGFR2",
            "FGFR3",
            "TWIST1",
            "MSX2",
            "chromosome",
            "deletion",
            "duplication",
            "variant",
            "polymorphism",
        ]
    }
}
