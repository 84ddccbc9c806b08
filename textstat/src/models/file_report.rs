// src/models/file_report.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::models::TextStatistics;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Frontmatter `title`, when the note declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub statistics: TextStatistics,
}

impl FileReport {
    /// Heading used when printing the report.
    #[inline]
    #[must_use]
    pub fn heading(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
