// src/core/scanner/document.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::analysis::compute_text_statistics;
use crate::models::{Document, FileReport, StatsConfig};
use crate::utils::split_frontmatter;

/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid UTF-8 text
#[inline]
pub fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(Document {
        path: path.to_path_buf(),
        content,
    })
}

/// Reads and analyzes a single file.
///
/// # Errors
///
/// Fails under the same conditions as [`read_document`].
#[inline]
pub fn analyze_file(path: &Path, config: &StatsConfig) -> Result<FileReport> {
    let document = read_document(path)?;
    Ok(analyze_text(document.path, &document.content, config))
}

/// Analyzes already-loaded content. A YAML frontmatter block is removed
/// first and its `title` kept for the report.
#[inline]
#[must_use]
pub fn analyze_text(path: PathBuf, content: &str, config: &StatsConfig) -> FileReport {
    let (frontmatter, body) = split_frontmatter(content);
    let statistics = compute_text_statistics(body, config);
    debug!(
        "{}: {} words, reading ease {:.1}",
        path.display(),
        statistics.word_count,
        statistics.flesch_reading_ease
    );

    FileReport {
        path,
        title: frontmatter.title,
        statistics,
    }
}
