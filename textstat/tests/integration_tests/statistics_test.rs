// tests/integration_tests/statistics_test.rs
use anyhow::Result;
use textstat::{
    ReadabilityLevel, StatsConfig, TextStatistics, compute_text_statistics, estimate_syllables,
};

fn stats(text: &str) -> TextStatistics {
    compute_text_statistics(text, &StatsConfig::default())
}

#[test]
fn test_empty_input_gives_zero_record() {
    let result = stats("");
    assert_eq!(result.word_count, 0);
    assert_eq!(result.character_count, 0);
    assert_eq!(result.sentence_count, 0);
    assert_eq!(result.paragraph_count, 0);
    assert_eq!(result.syllable_count, 0);
    assert_eq!(result.average_word_length, 0.0);
    assert_eq!(result.average_sentence_length, 0.0);
    assert_eq!(result.flesch_reading_ease, 0.0);
    assert_eq!(result.flesch_kincaid_grade, 0.0);
    assert_eq!(result.lexical_density, 0.0);
    assert_eq!(result.reading_time_minutes, 0.0);
    assert_eq!(result.speaking_time_minutes, 0.0);
    assert_eq!(result.readability_level, ReadabilityLevel::VeryDifficult);
}

#[test]
fn test_surrounding_whitespace_does_not_change_word_count() {
    let text = "  Some words, then more words.\n\n";
    assert_eq!(stats(text).word_count, stats(text.trim()).word_count);
    assert_eq!(stats(text).word_count, 5);
}

#[test]
fn test_same_input_gives_identical_output() -> Result<()> {
    let text = "Readable prose is kind. It respects the reader's time!\n\nShort words help.";
    let first = stats(text);
    let second = stats(text);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    Ok(())
}

#[test]
fn test_syllable_examples() {
    assert_eq!(estimate_syllables("cat"), 1);
    assert_eq!(estimate_syllables("banana"), 3);
    assert_eq!(estimate_syllables("the"), 1);
}

#[test]
fn test_keyword_example() {
    let config = StatsConfig::default().with_keyword_limit(2);
    let result = compute_text_statistics("apple apple banana banana banana cat", &config);

    assert_eq!(result.keyword_frequencies.len(), 2);
    let banana = &result.keyword_frequencies[0];
    assert_eq!((banana.word.as_str(), banana.count), ("banana", 3));
    assert!((banana.percentage - 50.0).abs() < 1e-9);
    let apple = &result.keyword_frequencies[1];
    assert_eq!((apple.word.as_str(), apple.count), ("apple", 2));
    assert!((apple.percentage - 33.33).abs() < 0.01);
}

#[test]
fn test_lexical_density_example() {
    let result = stats("the the the");
    assert_eq!(result.unique_word_count, 1);
    assert_eq!(result.word_count, 3);
    assert!((result.lexical_density - 33.33).abs() < 0.01);
}

#[test]
fn test_reading_time_example() {
    let text = vec!["words"; 400].join(" ");
    let config = StatsConfig::default().with_words_per_minute(200.0);
    assert_eq!(
        compute_text_statistics(&text, &config).reading_time_minutes,
        2.0
    );
}

#[test]
fn test_unterminated_sentence_is_not_counted() {
    assert_eq!(stats("Hello world").sentence_count, 0);
    assert_eq!(stats("Hello world.").sentence_count, 1);
}

#[test]
fn test_easy_and_hard_prose() {
    let easy = stats("The cat sat on the mat. The dog ran to the cat.");
    assert_eq!(easy.readability_level, ReadabilityLevel::VeryEasy);
    assert_eq!(easy.flesch_kincaid_grade, 0.0);

    let hard = stats(
        "Institutional interoperability necessitates comprehensive \
         organizational documentation procedures.",
    );
    assert!(hard.flesch_reading_ease < 0.0, "Reading ease is not clamped");
    assert_eq!(hard.readability_level, ReadabilityLevel::VeryDifficult);
    assert!(hard.flesch_kincaid_grade > 12.0);
}
