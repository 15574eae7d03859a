use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An ingested reference document, as handed over by the ingestion layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewDocument {
    pub filename: String,
    pub file_size: u64,
    pub text_content: String,
    pub image_count: u32,
}

/// A stored reference document.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub filename: String,
    pub file_size: u64,
    pub uploaded_at: jiff::Timestamp,
    pub text_content: String,
    pub image_count: u32,
    pub word_count: u32,
    pub character_count: u32,
}

/// Words per minute assumed by [`TextStats::estimated_reading_minutes`].
pub const READING_WORDS_PER_MINUTE: u32 = 200;

/// Size figures for a reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextStats {
    pub word_count: u32,
    pub character_count: u32,
    pub line_count: u32,
    /// Whole minutes at [`READING_WORDS_PER_MINUTE`], never less than one.
    pub estimated_reading_minutes: u32,
}

impl TextStats {
    pub fn measure(text: &str) -> Self {
        let saturate = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        let word_count = saturate(text.split_whitespace().count());
        Self {
            word_count,
            character_count: saturate(text.chars().count()),
            line_count: saturate(text.split('\n').count()),
            estimated_reading_minutes: (word_count / READING_WORDS_PER_MINUTE).max(1),
        }
    }
}

/// Normalize extracted document text before analysis.
///
/// Every line is trimmed, blank lines are dropped and runs of spaces inside a
/// line collapse to one space. Lines are rejoined with `\n`.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split(' ')
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
