// src/core/scanner/utils.rs
use crate::core::ignore::Patterns;
use crate::utils::is_hidden;
use std::path::Path;

/// Extensions picked up when scanning a directory. Files named explicitly
/// are analyzed whatever their extension.
pub const TEXT_EXTENSIONS: &[&str] = &["md", "markdown", "txt", "text", "rst"];

#[inline]
#[must_use]
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Determines if a directory entry should be excluded from processing based on
/// multiple criteria including:
/// - Whether it's a hidden file/directory
/// - Whether it is a directory named in `exclude_dirs`
/// - Whether its path relative to `root` matches the ignore patterns
pub fn should_exclude(
    entry: &walkdir::DirEntry,
    root: &Path,
    exclude_dirs: &[&str],
    ignore_patterns: Option<&Patterns>,
) -> bool {
    if is_hidden(entry) {
        return true;
    }

    if entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(&name))
    {
        return true;
    }

    if let Some(patterns) = ignore_patterns {
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if patterns.matches(relative) {
            return true;
        }
    }

    false
}
