// src/models/keyword_frequency.rs
use serde::Serialize;

/// A keyword with its occurrence count and share of all words in the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordFrequency {
    pub word: String,
    pub count: usize,
    /// Percentage of the total word count, short and stop words included.
    pub percentage: f64,
}
