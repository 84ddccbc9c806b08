// tests/integration_tests/summary_test.rs
use textstat::{CaseStyle, StatsConfig, convert_case, summarize};

const NOTE: &str = "Compost turns kitchen scraps into soil. \
    My neighbour waved hello this morning. \
    Healthy soil feeds the garden, and the garden feeds the kitchen. \
    Compost needs air, water and patience.";

#[test]
fn test_summary_keeps_source_order() {
    let summary = summarize(NOTE, 2, &StatsConfig::default());

    assert_eq!(summary.original_sentence_count, 4);
    assert_eq!(summary.sentences.len(), 2);
    let first = NOTE.find(summary.sentences[0].as_str());
    let second = NOTE.find(summary.sentences[1].as_str());
    assert!(first < second, "Sentences should stay in source order");
    assert!(
        !summary.text.contains("neighbour"),
        "The off-topic sentence should be dropped"
    );
}

#[test]
fn test_case_conversion() {
    assert_eq!(
        convert_case("compost needs AIR. and water", CaseStyle::Sentence),
        "Compost needs air. And water"
    );
    assert_eq!(
        convert_case("compost needs air", CaseStyle::Title),
        "Compost Needs Air"
    );
}
