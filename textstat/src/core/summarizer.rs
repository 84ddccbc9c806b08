// src/core/summarizer.rs
use std::collections::HashMap;

use crate::core::analysis::keywords::{keyword_counts, normalize_word};
use crate::core::analysis::metrics::ratio;
use crate::core::analysis::tokenizer;
use crate::models::{StatsConfig, Summary};

/// Builds an extractive summary of at most `max_sentences` sentences.
///
/// Sentences are scored by the average document frequency of their
/// keywords (short and stop words score nothing). The best sentences are
/// returned in their original order; equal scores favour the earlier one.
#[must_use]
pub fn summarize(text: &str, max_sentences: usize, config: &StatsConfig) -> Summary {
    let candidates = tokenizer::sentence_spans(text);
    if candidates.is_empty() || max_sentences == 0 {
        return Summary {
            original_sentence_count: candidates.len(),
            ..Summary::default()
        };
    }

    let frequencies: HashMap<String, usize> = keyword_counts(&tokenizer::words(text), config)
        .into_iter()
        .collect();

    let mut scored: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(index, sentence)| (index, score_sentence(sentence, &frequencies)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut chosen: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(index, _)| index)
        .collect();
    chosen.sort_unstable();

    let sentences: Vec<String> = chosen
        .iter()
        .filter_map(|&index| candidates.get(index))
        .map(|sentence| (*sentence).to_owned())
        .collect();

    Summary {
        text: sentences.join(" "),
        compression_ratio: ratio(sentences.len(), candidates.len()),
        original_sentence_count: candidates.len(),
        sentences,
    }
}

fn score_sentence(sentence: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let words = tokenizer::words(sentence);
    let total: usize = words
        .iter()
        .filter_map(|word| frequencies.get(&normalize_word(word)))
        .sum();
    ratio(total, words.len())
}
