// src/core/scanner.rs
mod document;
#[cfg(test)]
mod test_utils;
mod utils;

pub use document::{analyze_file, analyze_text, read_document};
pub use utils::{TEXT_EXTENSIONS, is_text_file, should_exclude};

use crate::core::ignore::load_ignore_patterns;
use crate::models::{Document, FileReport, StatsConfig};
use anyhow::{Context as _, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Collects the text files under a directory, in file-name order.
///
/// Hidden entries, directories named in `exclude_dirs` and paths matched by
/// the nearest `.textstatignore` are skipped.
///
/// # Arguments
///
/// * `dir` - The directory path to scan
/// * `exclude_dirs` - Directory names to skip wherever they appear
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
/// * The ignore patterns file cannot be parsed
#[inline]
pub fn collect_files(dir: &Path, exclude_dirs: &[&str]) -> Result<Vec<PathBuf>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let ignore_patterns = load_ignore_patterns(&absolute_dir)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &absolute_dir, exclude_dirs, Some(&ignore_patterns)))
    {
        let entry = entry.with_context(|| format!("Failed to scan {}", absolute_dir.display()))?;
        if entry.file_type().is_file() && is_text_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} text files in {}", files.len(), absolute_dir.display());
    Ok(files)
}

/// Loads every given path. Files are read directly; directories are
/// scanned with [`collect_files`].
///
/// A named file that cannot be read is an error. Files found while scanning
/// a directory that are not valid UTF-8 are skipped with a warning.
///
/// # Errors
///
/// This function may return an error if:
/// * A named path does not exist or cannot be read
/// * A directory scan fails
#[inline]
pub fn load_documents(paths: &[PathBuf], exclude_dirs: &[&str]) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            for file in collect_files(path, exclude_dirs)? {
                match fs::read_to_string(&file) {
                    Ok(content) => documents.push(Document {
                        path: file,
                        content,
                    }),
                    Err(e) => warn!("Skipping {}: {e}", file.display()),
                }
            }
        } else {
            documents.push(read_document(path)?);
        }
    }

    info!("Loaded {} documents", documents.len());
    Ok(documents)
}

/// Loads and analyzes every given path, see [`load_documents`].
///
/// # Errors
///
/// Fails under the same conditions as [`load_documents`].
#[inline]
pub fn analyze_paths(
    paths: &[PathBuf],
    exclude_dirs: &[&str],
    config: &StatsConfig,
) -> Result<Vec<FileReport>> {
    Ok(load_documents(paths, exclude_dirs)?
        .into_iter()
        .map(|document| analyze_text(document.path, &document.content, config))
        .collect())
}

/// The `top` reports with the lowest reading ease, hardest first. Reports
/// without words are left out; equal scores keep their input order.
#[inline]
#[must_use]
pub fn rank_hardest(reports: Vec<FileReport>, top: usize) -> Vec<FileReport> {
    let mut ranked: Vec<FileReport> = reports
        .into_iter()
        .filter(|report| report.statistics.word_count > 0)
        .collect();
    ranked.sort_by(|a, b| {
        a.statistics
            .flesch_reading_ease
            .total_cmp(&b.statistics.flesch_reading_ease)
    });
    ranked.truncate(top);
    ranked
}
