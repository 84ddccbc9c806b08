// src/core/analysis/keywords.rs
use std::collections::HashMap;

use crate::core::analysis::metrics::percentage;
use crate::models::{KeywordFrequency, StatsConfig};

/// Lowercases a token and drops every non-alphanumeric character.
#[inline]
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a normalized word may appear in keyword rankings.
#[inline]
#[must_use]
pub fn is_keyword(word: &str, config: &StatsConfig) -> bool {
    !word.is_empty()
        && word.chars().count() >= config.min_keyword_length
        && !config.stop_words.contains(word)
}

/// Counts keyword candidates, keeping the order in which each was first seen.
#[must_use]
pub fn keyword_counts<S: AsRef<str>>(words: &[S], config: &StatsConfig) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for word in words {
        let normalized = normalize_word(word.as_ref());
        if !is_keyword(&normalized, config) {
            continue;
        }
        if let Some(&position) = positions.get(&normalized) {
            if let Some(entry) = counts.get_mut(position) {
                entry.1 += 1;
            }
        } else {
            positions.insert(normalized.clone(), counts.len());
            counts.push((normalized, 1));
        }
    }

    counts
}

/// The `config.keyword_limit` most frequent keywords. Equal counts keep
/// first-occurrence order; percentages are relative to all words.
#[must_use]
pub fn keyword_frequencies<S: AsRef<str>>(
    words: &[S],
    config: &StatsConfig,
) -> Vec<KeywordFrequency> {
    let mut counts = keyword_counts(words, config);
    // stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(config.keyword_limit)
        .map(|(word, count)| KeywordFrequency {
            word,
            count,
            percentage: percentage(count, words.len()),
        })
        .collect()
}
