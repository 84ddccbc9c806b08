// src/models/document.rs
use std::path::PathBuf;

/// Raw text loaded from a file or stdin, before any analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}
