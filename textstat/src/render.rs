// src/render.rs
//! Output formatting. Everything here returns a `String`; printing is left
//! to the caller.
use anyhow::{Context as _, Result, bail};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;

use crate::models::{FileReport, Summary, TextStatistics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Serializes any report for the machine-readable formats.
///
/// # Errors
///
/// Returns an error if serialization fails, for example on a path that is
/// not valid UTF-8, or if called with [`OutputFormat::Text`].
#[inline]
pub fn render_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize report as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml_ng::to_string(value).context("Failed to serialize report as YAML")
        }
        OutputFormat::Text => bail!("Text output is rendered by the text renderers"),
    }
}

/// Presentation rounds here and only here; the statistics stay unrounded.
#[must_use]
pub fn render_statistics(stats: &TextStatistics) -> String {
    let mut out = String::new();
    let rows: [(&str, String); 15] = [
        ("Words", stats.word_count.to_string()),
        ("Characters", stats.character_count.to_string()),
        (
            "Characters (no spaces)",
            stats.character_count_no_spaces.to_string(),
        ),
        ("Sentences", stats.sentence_count.to_string()),
        ("Paragraphs", stats.paragraph_count.to_string()),
        ("Syllables", stats.syllable_count.to_string()),
        ("Avg word length", format!("{:.2}", stats.average_word_length)),
        (
            "Avg sentence length",
            format!("{:.2}", stats.average_sentence_length),
        ),
        (
            "Reading ease",
            format!(
                "{:.1} ({})",
                stats.flesch_reading_ease, stats.readability_level
            ),
        ),
        ("Grade level", format!("{:.1}", stats.flesch_kincaid_grade)),
        ("Unique words", stats.unique_word_count.to_string()),
        ("Lexical density", format!("{:.2}%", stats.lexical_density)),
        ("Reading time", format_minutes(stats.reading_time_minutes)),
        ("Speaking time", format_minutes(stats.speaking_time_minutes)),
        (
            "Longest word",
            stats.longest_word.clone().unwrap_or_else(|| "-".to_owned()),
        ),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<24}{value}");
    }

    if !stats.keyword_frequencies.is_empty() {
        let _ = writeln!(out, "\nTop keywords:");
        for keyword in &stats.keyword_frequencies {
            let _ = writeln!(
                out,
                "{:>8}  {:>6.2}%  {}",
                keyword.count, keyword.percentage, keyword.word
            );
        }
    }
    out
}

#[must_use]
pub fn render_file_report(report: &FileReport) -> String {
    format!(
        "== {} ==\n{}",
        report.heading(),
        render_statistics(&report.statistics)
    )
}

/// One line per file, hardest to read first.
#[must_use]
pub fn render_ranking(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "{:>8.1}  {:<16}  {:>6} words  {}",
            report.statistics.flesch_reading_ease,
            report.statistics.readability_level.label(),
            report.statistics.word_count,
            report.path.display()
        );
    }
    out
}

#[must_use]
pub fn render_summary(summary: &Summary) -> String {
    if summary.sentences.is_empty() {
        return String::new();
    }
    format!("{}\n", summary.text)
}

/// Formats fractional minutes as `1 min 30 sec`, rounding to whole seconds.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "minutes are non-negative and rounded first"
)]
pub fn format_minutes(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round().max(0.0) as u64;
    let (whole_minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    if whole_minutes == 0 {
        format!("{seconds} sec")
    } else {
        format!("{whole_minutes} min {seconds} sec")
    }
}
