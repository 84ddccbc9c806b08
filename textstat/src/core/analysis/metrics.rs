// src/core/analysis/metrics.rs
//! Ratios and vocabulary measures derived from the token lists.

use std::collections::{BTreeMap, HashSet};

use crate::core::analysis::keywords::normalize_word;

/// `numerator / denominator`, or 0 when the denominator is 0.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "counts stay far below 2^52")]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

#[inline]
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    ratio(part, total) * 100.0
}

/// Minutes needed to get through `words` at the given pace. A pace that is
/// not a positive number yields 0.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "counts stay far below 2^52")]
pub fn minutes(words: usize, words_per_minute: f64) -> f64 {
    if !(words_per_minute.is_finite() && words_per_minute > 0.0) {
        return 0.0;
    }
    words as f64 / words_per_minute
}

/// Vocabulary measures over normalized, non-empty words.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub unique_words: usize,
    pub length_distribution: BTreeMap<usize, usize>,
    pub longest_word: Option<String>,
}

#[must_use]
pub fn vocabulary<S: AsRef<str>>(words: &[S]) -> Vocabulary {
    let mut seen: HashSet<String> = HashSet::new();
    let mut vocabulary = Vocabulary::default();
    let mut longest_len = 0;

    for word in words {
        let normalized = normalize_word(word.as_ref());
        let len = normalized.chars().count();
        if len == 0 {
            continue;
        }

        *vocabulary.length_distribution.entry(len).or_insert(0) += 1;
        if len > longest_len {
            longest_len = len;
            vocabulary.longest_word = Some(normalized.clone());
        }
        seen.insert(normalized);
    }

    vocabulary.unique_words = seen.len();
    vocabulary
}
