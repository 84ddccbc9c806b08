// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, setup_test_directory};
use anyhow::Result;
use textstat::load_ignore_patterns;

#[test]
fn test_ignore_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_ignore_file(
        temp_dir.path(),
        &[
            "# Comment line",
            "*.tmp",
            "draft/",
            "!draft/important.md",
            "cache/",
            "*.{log,cache,tmp}",
            "/absolute_path.md",
            "build/**/*.md",
        ],
    )?;

    let patterns = load_ignore_patterns(temp_dir.path())?;

    assert!(patterns.matches("test.tmp"), "Should match *.tmp pattern");
    assert!(
        patterns.matches("draft/test.md"),
        "Should match draft/ pattern"
    );
    assert!(
        !patterns.matches("draft/important.md"),
        "Should respect negation pattern"
    );
    assert!(
        !patterns.matches("test.md"),
        "Should not match non-ignored file"
    );
    assert!(
        patterns.matches("test.log"),
        "Should match multiple extensions pattern"
    );
    assert!(
        patterns.matches("cache/data.json"),
        "Should match directory pattern"
    );
    assert!(
        patterns.matches("build/out/notes.md"),
        "Should match globstar pattern"
    );
    assert!(
        !patterns.matches("src/notes.md"),
        "Should not match files outside build/"
    );
    assert!(
        !patterns.matches("src/build/out/notes.md"),
        "A pattern with an inner slash should be anchored"
    );
    assert!(
        patterns.matches("absolute_path.md"),
        "Should match anchored path at root"
    );
    assert!(
        !patterns.matches("subdirectory/absolute_path.md"),
        "Should not match anchored path in subdirectory"
    );

    Ok(())
}
