use bookshelf_core::models::term::TermCategory;

use crate::Vocabulary;

/// Skull shape and suture vocabulary that points at a craniosynostosis
/// condition.
pub struct CraniofacialIndicators;

impl Vocabulary for CraniofacialIndicators {
    fn category(&self) -> TermCategory {
        TermCategory::Indicator
    }

    fn name(&self) -> &str {
        "Craniofacial indicators"
    }

    fn terms(&self) -> &[&'static str] {
        &[
            "craniosynostosis",
            "synostosis",
            "suture",
            "sagittal",
            "coronal",
            "metopic",
            "lambdoid",
            "fontanelle",
            "brachycephaly",
            "dolichocephaly",
            "trigonocephaly",
            "plagiocephaly",
            "scaphocephaly",
            "cloverleaf skull",
        ]
    }
}
