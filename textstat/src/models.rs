// src/models.rs
mod document;
mod file_report;
mod frontmatter;
mod keyword_frequency;
mod readability_level;
mod stats_config;
mod stop_words;
mod summary;
mod text_statistics;

pub use document::Document;
pub use file_report::FileReport;
pub use frontmatter::Frontmatter;
pub use keyword_frequency::KeywordFrequency;
pub use readability_level::ReadabilityLevel;
pub use stats_config::{
    DEFAULT_KEYWORD_LIMIT, DEFAULT_MIN_KEYWORD_LENGTH, DEFAULT_WORDS_PER_MINUTE,
    SPEAKING_WORDS_PER_MINUTE, StatsConfig,
};
pub use stop_words::{DEFAULT_STOP_WORDS, StopWords};
pub use summary::Summary;
pub use text_statistics::TextStatistics;
