use bookshelf_analyzer::config::{AnalyzerConfig, MatchMode};
use bookshelf_analyzer::genetics::additional_info;
use bookshelf_analyzer::matching::contains;
use bookshelf_analyzer::scoring::{
    evidence_snippet, feature_matches, score_condition, truncate_snippet,
};

const SMITH_CORPUS: &str = "Smith syndrome is characterized by craniosynostosis and hearing loss. Patients show developmental delay.";

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn substring_containment_ignores_word_boundaries() {
    assert!(contains("hearing loss", "ear", MatchMode::Substring));
    assert!(!contains("hearing loss", "ear", MatchMode::WordBoundary));
    assert!(contains("the ear is small", "ear", MatchMode::WordBoundary));
    assert!(contains("ear.", "ear", MatchMode::WordBoundary));
    assert!(contains("earear ear", "ear", MatchMode::WordBoundary));
    assert!(!contains("earear", "ear", MatchMode::WordBoundary));
}

#[test]
fn exact_phrase_matches() {
    assert!(feature_matches(
        "hearing loss",
        "patients have hearing loss",
        MatchMode::Substring
    ));
}

#[test]
fn partial_match_needs_half_the_words() {
    let context = "hearing is affected and severe";
    // 2 of 3 words
    assert!(feature_matches("severe hearing impairment", context, MatchMode::Substring));
    // 1 of 3 words
    assert!(!feature_matches(
        "severe hearing impairment",
        "hearing is affected",
        MatchMode::Substring
    ));
    // 1 of 2 words
    assert!(feature_matches("bilateral ptosis", "bilateral", MatchMode::Substring));
    // 2 of 4 words
    assert!(feature_matches(
        "small low set ears",
        "ears are small",
        MatchMode::Substring
    ));
    // 1 of 4 words
    assert!(!feature_matches(
        "small low set ears",
        "ears only",
        MatchMode::Substring
    ));
}

#[test]
fn short_words_match_inside_longer_ones_by_default() {
    assert!(feature_matches("ear", "hearing loss", MatchMode::Substring));
    assert!(!feature_matches("ear", "hearing loss", MatchMode::WordBoundary));
}

#[test]
fn evidence_is_the_first_sentence_with_the_feature() {
    let context = "Smith syndrome is characterized by craniosynostosis and hearing loss";
    assert_eq!(
        evidence_snippet("hearing loss", context, MatchMode::Substring).as_deref(),
        Some(context)
    );
    assert_eq!(
        evidence_snippet("severe hearing impairment", context, MatchMode::Substring),
        None
    );
}

#[test]
fn long_snippets_are_truncated_to_200_chars() {
    let long = "a".repeat(250);
    let snippet = truncate_snippet(&long);
    assert_eq!(snippet.len(), 203);
    assert!(snippet.ends_with("..."));

    let exact = "b".repeat(200);
    assert_eq!(truncate_snippet(&exact), exact);

    let wide = "é".repeat(250);
    let snippet = truncate_snippet(&wide);
    assert_eq!(snippet.chars().count(), 203);
}

#[test]
fn smith_scenario_scores_twenty() {
    let config = AnalyzerConfig::default();
    let result = score_condition(
        "Smith syndrome",
        &features(&["craniosynostosis", "hearing loss"]),
        SMITH_CORPUS,
        "craniosynostosis, hearing loss",
        &config,
    )
    .expect("condition accepted");

    assert_eq!(result.confidence_score, 20);
    assert_eq!(result.matching_features, vec!["craniosynostosis", "hearing loss"]);
    assert_eq!(result.evidence.len(), 2);
    assert_eq!(
        result.evidence[0],
        "Smith syndrome is characterized by craniosynostosis and hearing loss"
    );
    assert_eq!(result.additional_info, "");
}

#[test]
fn exact_name_bonus_applies_once() {
    let config = AnalyzerConfig::default();
    let result = score_condition(
        "Smith syndrome",
        &features(&["hearing loss"]),
        SMITH_CORPUS,
        "Smith syndrome suspected; family history of Smith syndrome",
        &config,
    )
    .expect("condition accepted");
    assert_eq!(result.confidence_score, 30);
}

#[test]
fn score_is_clamped_and_evidence_capped() {
    let corpus = "Apert syndrome features acrocephaly, syndactyly, proptosis, hypertelorism, \
                  strabismus, hearing loss, cleft palate, acne, hydrocephalus, fusion, delay \
                  and stiffness.";
    let phenotype_features = features(&[
        "acrocephaly",
        "syndactyly",
        "proptosis",
        "hypertelorism",
        "strabismus",
        "hearing loss",
        "cleft palate",
        "acne",
        "hydrocephalus",
        "fusion",
        "delay",
        "stiffness",
    ]);
    let result = score_condition(
        "Apert syndrome",
        &phenotype_features,
        corpus,
        "Apert syndrome",
        &AnalyzerConfig::default(),
    )
    .expect("condition accepted");

    assert_eq!(result.confidence_score, 100);
    assert_eq!(result.matching_features.len(), 12);
    assert_eq!(result.evidence.len(), 3);
}

#[test]
fn no_overlap_is_rejected() {
    let config = AnalyzerConfig::default();
    assert!(
        score_condition(
            "Smith syndrome",
            &features(&["polydactyly"]),
            SMITH_CORPUS,
            "polydactyly",
            &config,
        )
        .is_none()
    );
}

#[test]
fn absent_condition_is_rejected() {
    let config = AnalyzerConfig::default();
    assert!(
        score_condition(
            "Apert syndrome",
            &features(&["hearing loss"]),
            SMITH_CORPUS,
            "Apert syndrome, hearing loss",
            &config,
        )
        .is_none()
    );
}

#[test]
fn genetic_summary_lists_distinct_findings() {
    assert_eq!(
        additional_info("Apert syndrome is caused by mutations in FGFR2 and is autosomal dominant"),
        "Genetic factors: mutations in FGFR2, FGFR2, autosomal dominant"
    );
    assert_eq!(
        additional_info("mutation in TWIST1, gene TWIST1 on chromosome 7, FGFR3 autosomal dominant"),
        "Genetic factors: mutation in TWIST1, gene TWIST1, chromosome 7"
    );
    assert_eq!(
        additional_info("FGFR2 and FGFR2 and fgfr2"),
        "Genetic factors: FGFR2, fgfr2"
    );
    assert_eq!(additional_info("no genetics here"), "");
}
