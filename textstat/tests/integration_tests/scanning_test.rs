// tests/integration_tests/scanning_test.rs
use super::common::{create_ignore_file, create_test_file, setup_test_directory};
use anyhow::Result;
use textstat::{StatsConfig, analyze_paths, collect_files, rank_hardest};

#[test]
fn test_scanning_with_ignore() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let exclude_dirs = vec![".git"];

    let files = collect_files(temp_dir.path(), &exclude_dirs)?;
    assert_eq!(files.len(), 4, "Should only pick up text files");

    create_ignore_file(temp_dir.path(), &["draft/", "journal/"])?;
    let reports = analyze_paths(
        &[temp_dir.path().to_path_buf()],
        &exclude_dirs,
        &StatsConfig::default(),
    )?;

    assert_eq!(reports.len(), 2, "Should skip ignored directories");
    assert!(reports[0].path.ends_with("easy.md"));
    assert!(reports[1].path.ends_with("hard.md"));

    Ok(())
}

#[test]
fn test_excluded_directories() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "archive/old.md", "Old words.")?;

    let files = collect_files(temp_dir.path(), &["archive", "journal"])?;
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| !f.starts_with(temp_dir.path().join("archive"))));

    Ok(())
}

#[test]
fn test_ranking_hardest_first() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let reports = analyze_paths(
        &[temp_dir.path().to_path_buf()],
        &[],
        &StatsConfig::default(),
    )?;
    let ranked = rank_hardest(reports, 2);

    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].path.ends_with("hard.md"));
    assert!(
        ranked[0].statistics.flesch_reading_ease <= ranked[1].statistics.flesch_reading_ease
    );

    Ok(())
}
