// src/lib.rs
//! Readability and text statistics.
//!
//! The heart of the crate is [`compute_text_statistics`], a pure function
//! from a string to a [`TextStatistics`] record: word, sentence and
//! paragraph counts, syllables, Flesch Reading Ease and Flesch-Kincaid
//! grade, keyword frequencies, lexical density and reading time. The rest
//! wraps it for files, note directories and the `textstat` command line.
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod utils;

pub use cli::{Args, execute, run};
pub use config::{CONFIG_FILE_NAME, Settings};
pub use crate::core::analysis::compute_text_statistics;
pub use crate::core::analysis::syllables::estimate_syllables;
pub use crate::core::case::{CaseStyle, convert_case};
pub use crate::core::ignore::{IGNORE_FILE_NAME, Patterns, load_ignore_patterns};
pub use crate::core::scanner::{
    analyze_file, analyze_paths, collect_files, load_documents, rank_hardest,
};
pub use crate::core::summarizer::summarize;
pub use models::{
    Document, FileReport, Frontmatter, KeywordFrequency, ReadabilityLevel, StatsConfig, StopWords,
    Summary, TextStatistics,
};
pub use render::OutputFormat;
pub use utils::split_frontmatter;
