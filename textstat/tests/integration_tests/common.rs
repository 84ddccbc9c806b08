// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, ".textstatignore", &content)
}

/// A small notes vault: three prose notes, a draft, a scratch file and
/// some non-text clutter.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "easy.md",
        "---\ntitle: Easy Note\n---\nThe cat sat on the mat. The dog ran to the cat.",
    )?;

    create_test_file(
        temp_dir.path(),
        "hard.md",
        "Institutional interoperability necessitates comprehensive \
         organizational documentation procedures.",
    )?;

    create_test_file(
        temp_dir.path(),
        "journal/monday.txt",
        "Gardens need patience.\n\nGardens reward patience!",
    )?;

    create_test_file(temp_dir.path(), "draft/idea.md", "Half an idea")?;

    create_test_file(temp_dir.path(), "scratch.tmp", "Temporary file")?;

    create_test_file(temp_dir.path(), "cache/data.json", r#"{"name": "test"}"#)?;

    Ok(temp_dir)
}
