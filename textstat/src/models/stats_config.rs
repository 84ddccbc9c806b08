// src/models/stats_config.rs
use crate::models::StopWords;

pub const DEFAULT_WORDS_PER_MINUTE: f64 = 200.0;
pub const SPEAKING_WORDS_PER_MINUTE: f64 = 130.0;
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;
/// Normalized words shorter than this never count as keywords.
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 4;

/// Tunables for a statistics run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    pub words_per_minute: f64,
    pub keyword_limit: usize,
    pub min_keyword_length: usize,
    pub stop_words: StopWords,
}

impl StatsConfig {
    #[inline]
    #[must_use]
    pub fn with_words_per_minute(mut self, words_per_minute: f64) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_keyword_limit(mut self, keyword_limit: usize) -> Self {
        self.keyword_limit = keyword_limit;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            min_keyword_length: DEFAULT_MIN_KEYWORD_LENGTH,
            stop_words: StopWords::default(),
        }
    }
}
