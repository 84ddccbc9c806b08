// src/utils.rs
use crate::models::Frontmatter;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Separates a leading `---` YAML block from the body of a note.
///
/// Content without a complete frontmatter block is returned untouched.
/// Frontmatter that fails to parse is logged and treated as body text.
pub fn split_frontmatter(content: &str) -> (Frontmatter, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (Frontmatter::default(), content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            if yaml.trim().is_empty() {
                return (Frontmatter::default(), body);
            }
            return match serde_yaml_ng::from_str::<Frontmatter>(yaml) {
                Ok(frontmatter) => (frontmatter, body),
                Err(e) => {
                    warn!("Failed to parse frontmatter, analyzing it as text: {e}");
                    (Frontmatter::default(), content)
                }
            };
        }
        offset += line.len();
    }

    (Frontmatter::default(), content)
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    // The walk root itself is never hidden, so `textstat .` works.
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}

/// Looks for `file_name` in `dir` and then in each parent directory,
/// returning the first match.
pub fn find_upwards(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}
