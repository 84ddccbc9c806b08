// src/models/text_statistics.rs
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{KeywordFrequency, ReadabilityLevel};

/// Everything computed for one input string. The default value is the
/// all-zero record produced for empty input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStatistics {
    pub word_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub syllable_count: usize,
    /// Unclamped; may be negative or above 100.
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub readability_level: ReadabilityLevel,
    pub keyword_frequencies: Vec<KeywordFrequency>,
    pub unique_word_count: usize,
    pub lexical_density: f64,
    pub reading_time_minutes: f64,
    pub speaking_time_minutes: f64,
    /// Normalized word length to number of words of that length.
    pub word_length_distribution: BTreeMap<usize, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_word: Option<String>,
}
