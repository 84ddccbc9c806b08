// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use serde::Serialize;
use std::env;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Settings;
use crate::core::analysis::compute_text_statistics;
use crate::core::case::{CaseStyle, convert_case};
use crate::core::scanner::{analyze_text, load_documents, rank_hardest};
use crate::core::summarizer::summarize;
use crate::models::{Document, StatsConfig, Summary};
use crate::render::{
    OutputFormat, render_file_report, render_ranking, render_statistics, render_structured,
    render_summary,
};
use crate::utils::split_frontmatter;

const STDIN_LABEL: &str = "<stdin>";

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files or directories to analyze (reads stdin when omitted)
    pub paths: Vec<PathBuf>,

    /// Reading speed used for reading time, in words per minute
    #[arg(short = 'w', long)]
    pub wpm: Option<f64>,

    /// Number of keywords to report
    #[arg(short = 'k', long)]
    pub keywords: Option<usize>,

    /// Directories to exclude when scanning (comma-separated)
    #[arg(short, long, default_value = ".git")]
    pub exclude: String,

    /// Output format for statistics, rankings and summaries
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print an extractive summary of this many sentences instead of statistics
    #[arg(short, long, conflicts_with_all = ["case", "rank"])]
    pub summary: Option<usize>,

    /// Print the input converted to this case instead of statistics
    #[arg(short = 'C', long, value_enum, conflicts_with = "rank")]
    pub case: Option<CaseStyle>,

    /// Rank this many files from hardest to easiest to read
    #[arg(short, long, requires = "paths")]
    pub rank: Option<usize>,

    /// Settings file to use instead of searching for .textstat.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    summary: Summary,
}

/// Runs the command and prints its output to stdout.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the settings are invalid,
/// or the output cannot be serialized.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let output = execute(&args)?;
    print!("{output}");
    Ok(())
}

/// Runs the command and returns what [`run`] would print.
///
/// # Errors
///
/// Same as [`run`].
#[inline]
pub fn execute(args: &Args) -> Result<String> {
    let config = stats_config(args)?;
    let documents = read_input(args)?;
    let from_stdin = args.paths.is_empty();

    if let Some(style) = args.case {
        return Ok(documents
            .iter()
            .map(|document| ensure_trailing_newline(convert_case(&document.content, style)))
            .collect());
    }

    if let Some(max_sentences) = args.summary {
        return render_summaries(&documents, max_sentences, &config, args.format, from_stdin);
    }

    if from_stdin {
        let content = documents
            .first()
            .map_or("", |document| document.content.as_str());
        let (_, body) = split_frontmatter(content);
        let statistics = compute_text_statistics(body, &config);
        return match args.format {
            OutputFormat::Text => Ok(render_statistics(&statistics)),
            format => render_structured(&statistics, format).map(ensure_trailing_newline),
        };
    }

    let reports: Vec<_> = documents
        .into_iter()
        .map(|document| analyze_text(document.path, &document.content, &config))
        .collect();

    if let Some(top) = args.rank {
        let ranked = rank_hardest(reports, top);
        return match args.format {
            OutputFormat::Text => Ok(render_ranking(&ranked)),
            format => render_structured(&ranked, format).map(ensure_trailing_newline),
        };
    }

    match args.format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(render_file_report)
            .collect::<Vec<_>>()
            .join("\n")),
        format => render_structured(&reports, format).map(ensure_trailing_newline),
    }
}

fn stats_config(args: &Args) -> Result<StatsConfig> {
    let settings = if let Some(path) = &args.config {
        Settings::load(path)?
    } else {
        let start = settings_search_start(args)?;
        Settings::discover(&start)?
            .map(|(_, settings)| settings)
            .unwrap_or_default()
    };
    let config = settings.to_stats_config(args.wpm, args.keywords)?;
    debug!(?config, "Resolved statistics configuration");
    Ok(config)
}

/// Settings are looked up from the first named path, or the working
/// directory when reading stdin.
fn settings_search_start(args: &Args) -> Result<PathBuf> {
    let start = match args.paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        None => PathBuf::from("."),
    };
    if start.is_absolute() {
        Ok(start)
    } else {
        Ok(env::current_dir()
            .context("Failed to determine the working directory")?
            .join(start))
    }
}

fn read_input(args: &Args) -> Result<Vec<Document>> {
    if !args.paths.is_empty() {
        let exclude_dirs: Vec<&str> = args.exclude.split(',').map(str::trim).collect();
        return load_documents(&args.paths, &exclude_dirs);
    }

    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(vec![Document {
        path: PathBuf::from(STDIN_LABEL),
        content,
    }])
}

fn render_summaries(
    documents: &[Document],
    max_sentences: usize,
    config: &StatsConfig,
    format: OutputFormat,
    from_stdin: bool,
) -> Result<String> {
    let reports: Vec<SummaryReport<'_>> = documents
        .iter()
        .map(|document| SummaryReport {
            path: &document.path,
            summary: summarize(split_frontmatter(&document.content).1, max_sentences, config),
        })
        .collect();

    match format {
        OutputFormat::Text if from_stdin => Ok(reports
            .first()
            .map(|report| render_summary(&report.summary))
            .unwrap_or_default()),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| {
                format!(
                    "== {} ==\n{}",
                    report.path.display(),
                    render_summary(&report.summary)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        format => render_structured(&reports, format).map(ensure_trailing_newline),
    }
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
