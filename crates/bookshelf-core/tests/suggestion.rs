use bookshelf_core::models::analysis::StoredSuggestion;
use bookshelf_core::models::confidence::ConfidenceBand;
use bookshelf_core::models::document::TextStats;
use bookshelf_core::models::suggestion::{MatchResult, RankedSuggestion};
use uuid::Uuid;

fn sample_result(score: u8) -> MatchResult {
    MatchResult {
        condition: "Crouzon syndrome".to_string(),
        confidence_score: score,
        matching_features: vec!["craniosynostosis".to_string(), "proptosis".to_string()],
        evidence: vec![
            "Crouzon syndrome presents with craniosynostosis".to_string(),
            "Crouzon syndrome shows proptosis".to_string(),
        ],
        additional_info: "Genetic factors: FGFR2".to_string(),
    }
}

#[test]
fn ranked_suggestion_keeps_raw_score_and_derives_band() {
    let ranked = RankedSuggestion::from(sample_result(55));
    assert_eq!(ranked.score, 55);
    assert_eq!(ranked.confidence, ConfidenceBand::Moderate);
    assert_eq!(ranked.condition, "Crouzon syndrome");
}

#[test]
fn ranked_suggestion_serializes_band_without_raw_score() {
    let ranked = RankedSuggestion::from(sample_result(85));
    let value = serde_json::to_value(&ranked).unwrap();
    assert_eq!(value["confidence"], "High confidence");
    assert!(value.get("score").is_none());
    assert_eq!(value["matching_features"][1], "proptosis");
}

#[test]
fn stored_suggestion_uses_reverse_mapping() {
    let analysis_id = Uuid::new_v4();
    let ranked = RankedSuggestion::from(sample_result(55));
    let stored = StoredSuggestion::from_ranked(analysis_id, &ranked);

    assert_eq!(stored.analysis_id, analysis_id);
    assert_eq!(stored.confidence_level, "Moderate confidence");
    assert_eq!(stored.confidence_score, 60);
    assert_eq!(stored.matching_features, "craniosynostosis, proptosis");
    assert_eq!(
        stored.evidence,
        "Crouzon syndrome presents with craniosynostosis; Crouzon syndrome shows proptosis"
    );
    assert_eq!(stored.additional_info, "Genetic factors: FGFR2");
}

#[test]
fn text_stats_counts_words_and_chars() {
    let stats = TextStats::measure("Apert syndrome\naffects the  skull.");
    assert_eq!(stats.word_count, 5);
    assert_eq!(stats.character_count, 34);
    assert_eq!(stats.line_count, 2);
    assert_eq!(stats.estimated_reading_minutes, 1);
    assert_eq!(TextStats::measure("").word_count, 0);
}
