// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use crate::utils::find_upwards;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const IGNORE_FILE_NAME: &str = ".textstatignore";

/// Loads ignore patterns from the nearest `.textstatignore`, searching `dir`
/// and then its parents. No file means no patterns.
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file exists but cannot be read
/// * The file contains invalid pattern syntax
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::default();

    let Some(ignore_file) = find_upwards(dir, IGNORE_FILE_NAME) else {
        return Ok(patterns);
    };

    debug!("Loading ignore patterns from {}", ignore_file.display());
    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_file.display()))?;

    for line in content.lines() {
        patterns
            .add_pattern(line)
            .with_context(|| format!("In ignore file: {}", ignore_file.display()))?;
    }

    Ok(patterns)
}
