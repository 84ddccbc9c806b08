// src/models/summary.rs
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Chosen sentences in the order they appear in the source text.
    pub sentences: Vec<String>,
    pub text: String,
    pub original_sentence_count: usize,
    pub compression_ratio: f64,
}
