use bookshelf_analyzer::Analyzer;
use bookshelf_analyzer::config::{AnalyzerConfig, MatchMode};
use bookshelf_analyzer::error::AnalyzerError;
use bookshelf_core::models::confidence::ConfidenceBand;

const SMITH_CORPUS: &str = "Smith syndrome is characterized by craniosynostosis and hearing loss. Patients show developmental delay.";

const HEARING_CORPUS: &str = "Apert syndrome causes hearing loss. Crouzon syndrome causes hearing loss. \
Pfeiffer syndrome causes hearing loss. Muenke syndrome causes hearing loss. \
Carpenter syndrome causes hearing loss. Jackson syndrome causes hearing loss. \
Antley syndrome causes hearing loss.";

#[test]
fn smith_scenario() {
    let analyzer = Analyzer::new();
    let suggestions = analyzer.analyze_phenotype("craniosynostosis, hearing loss", SMITH_CORPUS);

    let smith = &suggestions[0];
    assert_eq!(smith.condition, "Smith syndrome");
    assert_eq!(smith.score, 20);
    assert_eq!(smith.confidence, ConfidenceBand::Low);
    assert_eq!(smith.matching_features, vec!["craniosynostosis", "hearing loss"]);
}

#[test]
fn evaluate_keeps_discovery_order() {
    let analyzer = Analyzer::new();
    let results = analyzer.evaluate("craniosynostosis, hearing loss", SMITH_CORPUS);
    let conditions: Vec<&str> = results.iter().map(|r| r.condition.as_str()).collect();
    assert_eq!(
        conditions,
        vec![
            "Smith syndrome",
            "Smith syndrome is characterized by craniosynostosis"
        ]
    );
    assert!(results.iter().all(|r| r.confidence_score == 20));
}

#[test]
fn empty_inputs_yield_no_suggestions() {
    let analyzer = Analyzer::new();
    assert!(analyzer.analyze_phenotype("hearing loss", "").is_empty());
    assert!(analyzer.analyze_phenotype("", SMITH_CORPUS).is_empty());
}

#[test]
fn corpus_without_condition_names_yields_nothing() {
    let analyzer = Analyzer::new();
    let corpus = "patients show developmental delay and hearing loss. craniosynostosis is common.";
    assert!(analyzer.analyze_phenotype("hearing loss", corpus).is_empty());
}

#[test]
fn results_are_capped_and_ties_keep_discovery_order() {
    let analyzer = Analyzer::new();
    let suggestions = analyzer.analyze_phenotype("hearing loss", HEARING_CORPUS);

    let conditions: Vec<&str> = suggestions.iter().map(|s| s.condition.as_str()).collect();
    assert_eq!(
        conditions,
        vec![
            "Apert syndrome",
            "Crouzon syndrome",
            "Pfeiffer syndrome",
            "Muenke syndrome",
            "Carpenter syndrome",
        ]
    );
    assert!(
        suggestions
            .iter()
            .all(|s| s.score == 10 && s.confidence == ConfidenceBand::VeryLow)
    );
}

#[test]
fn higher_scores_rank_first() {
    let analyzer = Analyzer::new();
    let corpus = "Apert syndrome causes hearing loss. \
                  Crouzon syndrome causes hearing loss, proptosis and craniosynostosis.";
    let suggestions = analyzer.analyze_phenotype("hearing loss, proptosis, craniosynostosis", corpus);

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].condition, "Crouzon syndrome");
    assert_eq!(suggestions[0].score, 30);
    assert_eq!(suggestions[1].condition, "Apert syndrome");
    assert_eq!(suggestions[1].score, 10);
    assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn repeated_name_in_phenotype_earns_one_bonus() {
    let analyzer = Analyzer::new();
    let corpus = "Apert syndrome causes syndactyly.";

    let once = analyzer.analyze_phenotype("Apert syndrome", corpus);
    assert_eq!(once[0].score, 30);

    let twice = analyzer.analyze_phenotype("Apert syndrome, apert syndrome", corpus);
    assert_eq!(twice[0].score, 40);
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = Analyzer::new();
    let first = analyzer.analyze_phenotype("hearing loss, craniosynostosis", SMITH_CORPUS);
    let second = analyzer.analyze_phenotype("hearing loss, craniosynostosis", SMITH_CORPUS);
    assert_eq!(first, second);
}

#[test]
fn one_analyzer_serves_many_threads() {
    let analyzer = Analyzer::new();
    let expected = analyzer.analyze_phenotype("hearing loss", HEARING_CORPUS);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| analyzer.analyze_phenotype("hearing loss", HEARING_CORPUS)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn word_boundary_mode_rejects_embedded_words() {
    let corpus = "Apert syndrome presents with hearing impairment.";

    let substring = Analyzer::new();
    assert_eq!(substring.analyze_phenotype("ear", corpus).len(), 1);

    let strict = Analyzer::with_config(AnalyzerConfig {
        match_mode: MatchMode::WordBoundary,
        ..AnalyzerConfig::default()
    })
    .unwrap();
    assert!(strict.analyze_phenotype("ear", corpus).is_empty());
}

#[test]
fn suggestion_limit_is_configurable() {
    let analyzer = Analyzer::with_config(AnalyzerConfig {
        max_suggestions: 2,
        ..AnalyzerConfig::default()
    })
    .unwrap();
    assert_eq!(analyzer.analyze_phenotype("hearing loss", HEARING_CORPUS).len(), 2);
}

#[test]
fn invalid_limits_are_rejected() {
    let zero = AnalyzerConfig {
        max_suggestions: 0,
        ..AnalyzerConfig::default()
    };
    assert!(matches!(
        Analyzer::with_config(zero),
        Err(AnalyzerError::InvalidSuggestionLimit { value: 0, max: 5 })
    ));

    let too_much_evidence = AnalyzerConfig {
        max_evidence: 4,
        ..AnalyzerConfig::default()
    };
    assert!(matches!(
        too_much_evidence.validate(),
        Err(AnalyzerError::InvalidEvidenceLimit { value: 4, max: 3 })
    ));

    assert!(AnalyzerConfig::default().validate().is_ok());
}

#[test]
fn config_fields_default_when_missing() {
    let config: AnalyzerConfig = serde_json::from_str(r#"{"match_mode":"word_boundary"}"#).unwrap();
    assert_eq!(config.match_mode, MatchMode::WordBoundary);
    assert_eq!(config.max_suggestions, 5);
    assert_eq!(config.max_evidence, 3);
}

#[test]
fn key_terms_from_corpus() {
    let analyzer = Analyzer::new();
    let terms: Vec<String> = analyzer.extract_key_terms(SMITH_CORPUS).into_iter().collect();
    assert_eq!(
        terms,
        vec![
            "Smith syndrome",
            "craniosynostosis",
            "developmental delay",
            "hearing loss",
            "synostosis",
        ]
    );
}

#[test]
fn images_get_numbered_descriptions() {
    let analyzer = Analyzer::new();
    let images: Vec<Vec<u8>> = vec![vec![0xff, 0xd8], vec![0x89, 0x50]];
    let descriptions = analyzer.analyze_images(&images);

    assert_eq!(descriptions.len(), 2);
    assert!(descriptions[0].starts_with("Image 1 Analysis:"));
    assert!(descriptions[1].starts_with("Image 2 Analysis:"));

    let none: Vec<Vec<u8>> = Vec::new();
    assert!(analyzer.analyze_images(&none).is_empty());
}
