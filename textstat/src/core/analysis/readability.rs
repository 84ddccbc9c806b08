// src/core/analysis/readability.rs
//! Flesch formulas over averaged counts.

use crate::models::ReadabilityLevel;

/// `206.835 − 1.015 × words/sentence − 84.6 × syllables/word`, unclamped.
#[inline]
#[must_use]
pub fn flesch_reading_ease(average_sentence_length: f64, syllables_per_word: f64) -> f64 {
    206.835 - 1.015 * average_sentence_length - 84.6 * syllables_per_word
}

/// `0.39 × words/sentence + 11.8 × syllables/word − 15.59`, floored at 0.
#[inline]
#[must_use]
pub fn flesch_kincaid_grade(average_sentence_length: f64, syllables_per_word: f64) -> f64 {
    (0.39 * average_sentence_length + 11.8 * syllables_per_word - 15.59).max(0.0)
}

#[inline]
#[must_use]
pub fn readability_level(reading_ease: f64) -> ReadabilityLevel {
    ReadabilityLevel::from_score(reading_ease)
}
