//! End-to-end extraction scenarios over the rule-based analyzer.

use term_miner::{
    DictionaryConfidence, DictionaryReason, ExtractionConfig, FilterTables, RuleBasedAnalyzer,
    TermExtractor,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn extractor() -> TermExtractor<RuleBasedAnalyzer> {
    TermExtractor::new(RuleBasedAnalyzer::new())
}

fn permissive() -> ExtractionConfig {
    ExtractionConfig::new()
        .with_min_count(2)
        .with_npmi_threshold(-1.0)
        .with_relevance_threshold(0.0)
}

#[test]
fn recurring_bigram_becomes_a_candidate() {
    init_logging();
    let docs = [
        "공유 주차장 예약 방법",
        "우리 동네 공유 주차장 현황",
        "공유 주차장 요금 안내",
        "공유 주차장 이용 후기",
    ];
    let result = extractor().extract(&docs, &permissive());

    assert_eq!(result.total_documents, 4);
    let hit = result
        .candidates
        .iter()
        .find(|c| c.term == "공유 주차장")
        .expect("expected 공유 주차장 candidate");
    assert_eq!(hit.components, ["공유".to_string(), "주차장".to_string()]);
    assert_eq!(hit.count, 4);
    assert_eq!(hit.doc_count, 4);
    assert!((-1.0..=1.0).contains(&hit.npmi));
    assert!((0.0..=1.0).contains(&hit.relevance_score));
}

#[test]
fn empty_corpus_returns_empty_result() {
    init_logging();
    let docs: Vec<String> = Vec::new();
    let result = extractor().extract(&docs, &ExtractionConfig::default());

    assert_eq!(result.total_documents, 0);
    assert!(result.unigrams.is_empty());
    assert!(result.ngrams.is_empty());
    assert!(result.candidates.is_empty());
    assert!(result.dictionary_candidates.is_empty());
    assert!(result.failed_documents.is_empty());
}

#[test]
fn candidate_term_keeps_natural_spacing() {
    init_logging();
    // the particle variant appears once, the plain variant twice: the
    // most frequent literal surface form wins
    let docs = ["주차장을 이용 안내", "주차장 이용 안내", "주차장 이용 안내"];
    let result = extractor().extract(&docs, &permissive());

    assert!(result.candidates.iter().any(|c| c.term == "주차장 이용"));
    assert!(!result.candidates.iter().any(|c| c.term == "주차장을 이용"));
}

#[test]
fn ranking_is_deterministic_across_runs() {
    init_logging();
    let docs = [
        "공유 주차장 예약",
        "공유 주차장 예약",
        "회의실 예약 안내",
        "회의실 예약 안내",
        "사무실 이전 공지",
        "사무실 이전 공지",
    ];
    let first = extractor().extract(&docs, &permissive());
    let second = extractor().extract(&docs, &permissive());
    assert_eq!(first, second);

    // scores are rounded, so equal-scored ties must fall back to the
    // term ordering
    for pair in first.candidates.windows(2) {
        assert!(
            pair[0].relevance_score > pair[1].relevance_score
                || (pair[0].relevance_score == pair[1].relevance_score
                    && pair[0].term < pair[1].term)
        );
    }
}

#[test]
fn stopword_and_excluded_terms_are_dropped() {
    init_logging();
    let docs = ["공유 주차장 예약", "공유 주차장 예약", "공유 주차장 예약"];

    let config = permissive().with_stopwords(["예약"]);
    let result = extractor().extract(&docs, &config);
    assert!(result.candidates.iter().all(|c| !c.term.contains("예약")));

    let config = permissive().with_excluded_terms(["공유 주차장"]);
    let result = extractor().extract(&docs, &config);
    assert!(!result.candidates.iter().any(|c| c.term == "공유 주차장"));
}

#[test]
fn oversplit_loanword_lands_in_dictionary_candidates() {
    init_logging();
    // "버네" / "티스" only ever appear together: a split transliteration
    let docs = [
        "버네 티스 운영",
        "버네 티스 설정",
        "버네 티스 배포",
        "회의실 예약 두번",
        "회의실 예약 안내",
    ];
    let result = extractor().extract(&docs, &permissive());

    let hit = result
        .dictionary_candidates
        .iter()
        .find(|d| d.components == ["버네".to_string(), "티스".to_string()])
        .expect("expected a dictionary candidate for 버네/티스");
    assert_eq!(hit.reason, DictionaryReason::LoanwordSplit);
    assert_eq!(hit.confidence, DictionaryConfidence::High);
    assert!(hit.npmi >= 0.95);
}

#[test]
fn custom_filter_tables_are_honored() {
    init_logging();
    let docs = ["공유 주차장 예약", "공유 주차장 예약"];

    let mut tables = FilterTables::default();
    tables.stopwords.insert("공유".to_string());
    let result = TermExtractor::new(RuleBasedAnalyzer::new())
        .with_tables(tables)
        .extract(&docs, &permissive());

    assert!(!result.candidates.iter().any(|c| c.term == "공유 주차장"));
}

#[test]
fn config_round_trips_as_json() {
    // thresholds ship as versioned configuration alongside the tables
    let config: ExtractionConfig = serde_json::from_str(
        r#"{
            "min_count": 2,
            "npmi_threshold": 0.1,
            "relevance_threshold": 0.2,
            "stopwords": ["예약"],
            "excluded_terms": []
        }"#,
    )
    .unwrap();
    assert_eq!(config.min_count, 2);
    assert!(config.stopwords.contains("예약"));
}
