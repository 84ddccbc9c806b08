use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "simple.md", "This is a simple note.")?;
    create_test_file(&dir, "plain.txt", "Plain text\nwith two lines.")?;
    create_test_file(&dir, "nested/deeper.md", "Nested notes count too.")?;
    create_test_file(
        &dir,
        "titled.md",
        "---\ntitle: A Titled Note\ntags: [draft]\n---\nFive words in this body.",
    )?;

    create_test_file(&dir, ".hidden.md", "Hidden file")?;
    create_test_file(&dir, "image.png", "not really an image")?;

    Ok(dir)
}
