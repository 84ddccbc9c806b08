// tests/integration_tests/edge_cases_test.rs
use super::common::{create_ignore_file, setup_test_directory};
use anyhow::Result;
use textstat::{StatsConfig, collect_files, compute_text_statistics, load_ignore_patterns};

#[test]
fn test_degenerate_inputs_never_produce_nan() {
    for input in ["", " ", "\n\n\n", "a", "...", "?!", "--- ---", "\u{200b}", "42"] {
        let stats = compute_text_statistics(input, &StatsConfig::default());
        for value in [
            stats.average_word_length,
            stats.average_sentence_length,
            stats.flesch_reading_ease,
            stats.flesch_kincaid_grade,
            stats.lexical_density,
            stats.reading_time_minutes,
            stats.speaking_time_minutes,
        ] {
            assert!(value.is_finite(), "{input:?} produced {value}");
        }
        assert!(stats.flesch_kincaid_grade >= 0.0);
    }
}

#[test]
fn test_single_character() {
    let stats = compute_text_statistics("a", &StatsConfig::default());
    assert_eq!(stats.word_count, 1);
    assert_eq!(stats.syllable_count, 1);
    assert_eq!(stats.sentence_count, 0);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.unique_word_count, 1);
    assert!(stats.keyword_frequencies.is_empty());
}

#[test]
fn test_punctuation_only_input() {
    let stats = compute_text_statistics("... !!! ???", &StatsConfig::default());
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.sentence_count, 0);
    assert_eq!(stats.syllable_count, 0);
    assert_eq!(stats.unique_word_count, 0);
    assert!(stats.longest_word.is_none());
}

#[test]
fn test_non_ascii_text() {
    let stats = compute_text_statistics("Café naïve résumé. Über straße!", &StatsConfig::default());
    assert_eq!(stats.word_count, 5);
    assert_eq!(stats.character_count, 31);
    assert_eq!(stats.sentence_count, 2);
    assert_eq!(stats.longest_word.as_deref(), Some("résumé"));
}

#[test]
fn test_ignore_file_edge_cases() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_ignore_file(temp_dir.path(), &[])?;
    let files = collect_files(temp_dir.path(), &[".git"])?;
    assert_eq!(files.len(), 4, "Empty ignore file should not exclude any files");

    create_ignore_file(
        temp_dir.path(),
        &["# Comment 1", "", "  # Comment 2  ", "     ", "# Comment 3"],
    )?;
    let files = collect_files(temp_dir.path(), &[".git"])?;
    assert_eq!(files.len(), 4, "Comments should not exclude any files");

    create_ignore_file(
        temp_dir.path(),
        &["*.{tmp,bak,swp}", "**/*.log", "!/important/**/*.log", "**/node_modules/**"],
    )?;
    let patterns = load_ignore_patterns(temp_dir.path())?;
    assert!(patterns.matches("test.tmp"), "Should match extension group");
    assert!(
        patterns.matches("deep/nested/file.log"),
        "Should match double globstar"
    );
    assert!(
        !patterns.matches("important/logs/app.log"),
        "Should respect negation with globstar"
    );
    assert!(
        patterns.matches("packages/node_modules/file.js"),
        "Should match nested node_modules"
    );

    Ok(())
}
