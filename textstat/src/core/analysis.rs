// src/core/analysis.rs
//! The statistics pipeline: tokenize once, then derive counts, syllables,
//! readability scores, keywords and vocabulary measures from the tokens.

pub mod keywords;
pub mod metrics;
pub mod readability;
pub mod syllables;
pub mod tokenizer;

use tracing::debug;

use crate::models::{SPEAKING_WORDS_PER_MINUTE, StatsConfig, TextStatistics};
use keywords::{keyword_frequencies, normalize_word};
use metrics::{minutes, percentage, ratio, vocabulary};
use syllables::estimate_syllables;

/// Computes every statistic for `text`.
///
/// Pure and infallible: the same input and configuration always give the
/// same record, and empty or whitespace-only input gives the all-zero
/// record instead of NaN or infinite values.
///
/// # Examples
///
/// ```
/// use textstat::{StatsConfig, compute_text_statistics};
///
/// let stats = compute_text_statistics("The cat sat. The dog ran.", &StatsConfig::default());
/// assert_eq!(stats.word_count, 6);
/// assert_eq!(stats.sentence_count, 2);
/// ```
#[must_use]
#[tracing::instrument(level = "trace", skip_all, fields(text_len = text.len()))]
pub fn compute_text_statistics(text: &str, config: &StatsConfig) -> TextStatistics {
    let words = tokenizer::words(text);
    let word_count = words.len();
    if word_count == 0 {
        debug!("no words in input, returning empty statistics");
        return TextStatistics {
            character_count: text.chars().count(),
            ..TextStatistics::default()
        };
    }

    let sentence_count = tokenizer::sentences(text).len();
    let paragraph_count = tokenizer::paragraphs(text).len();

    let total_word_chars: usize = words.iter().map(|word| word.chars().count()).sum();
    let syllable_count: usize = words
        .iter()
        .map(|word| normalize_word(word))
        .filter(|word| !word.is_empty())
        .map(|word| estimate_syllables(&word))
        .sum();

    let average_sentence_length = ratio(word_count, sentence_count);
    let syllables_per_word = ratio(syllable_count, word_count);
    let flesch_reading_ease =
        readability::flesch_reading_ease(average_sentence_length, syllables_per_word);

    let vocabulary = vocabulary(&words);

    TextStatistics {
        word_count,
        character_count: text.chars().count(),
        character_count_no_spaces: text.chars().filter(|ch| !ch.is_whitespace()).count(),
        sentence_count,
        paragraph_count,
        average_word_length: ratio(total_word_chars, word_count),
        average_sentence_length,
        syllable_count,
        flesch_reading_ease,
        flesch_kincaid_grade: readability::flesch_kincaid_grade(
            average_sentence_length,
            syllables_per_word,
        ),
        readability_level: readability::readability_level(flesch_reading_ease),
        keyword_frequencies: keyword_frequencies(&words, config),
        unique_word_count: vocabulary.unique_words,
        lexical_density: percentage(vocabulary.unique_words, word_count),
        reading_time_minutes: minutes(word_count, config.words_per_minute),
        speaking_time_minutes: minutes(word_count, SPEAKING_WORDS_PER_MINUTE),
        word_length_distribution: vocabulary.length_distribution,
        longest_word: vocabulary.longest_word,
    }
}
