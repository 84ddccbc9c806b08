// src/config.rs
//! `.textstat.toml` settings.
//!
//! ```toml
//! words_per_minute = 250
//! keyword_limit = 5
//! min_keyword_length = 5
//! # replaces the built-in list
//! stop_words = ["the", "and"]
//! # added to whichever list is in effect
//! extra_stop_words = ["lorem"]
//! ```
use anyhow::{Context as _, Result, ensure};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::{StatsConfig, StopWords};
use crate::utils::find_upwards;

pub const CONFIG_FILE_NAME: &str = ".textstat.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub words_per_minute: Option<f64>,
    pub keyword_limit: Option<usize>,
    pub min_keyword_length: Option<usize>,
    pub stop_words: Option<Vec<String>>,
    pub extra_stop_words: Vec<String>,
}

impl Settings {
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or has unknown keys.
    #[inline]
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// Loads the nearest `.textstat.toml` at or above `dir`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file is found but cannot be loaded.
    #[inline]
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let Some(path) = find_upwards(dir, CONFIG_FILE_NAME) else {
            debug!("No {CONFIG_FILE_NAME} found from {}", dir.display());
            return Ok(None);
        };
        debug!("Using settings from {}", path.display());
        let settings = Self::load(&path)?;
        Ok(Some((path, settings)))
    }

    /// Builds the engine configuration, letting explicit overrides win over
    /// file values and file values win over defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting words-per-minute is not a positive
    /// number.
    #[inline]
    pub fn to_stats_config(
        &self,
        words_per_minute: Option<f64>,
        keyword_limit: Option<usize>,
    ) -> Result<StatsConfig> {
        let mut config = StatsConfig::default();

        if let Some(wpm) = words_per_minute.or(self.words_per_minute) {
            ensure!(
                wpm.is_finite() && wpm > 0.0,
                "words per minute must be a positive number, got {wpm}"
            );
            config.words_per_minute = wpm;
        }
        if let Some(limit) = keyword_limit.or(self.keyword_limit) {
            config.keyword_limit = limit;
        }
        if let Some(min_len) = self.min_keyword_length {
            config.min_keyword_length = min_len;
        }
        if let Some(words) = &self.stop_words {
            config.stop_words = StopWords::new(words);
        }
        config.stop_words.extend(&self.extra_stop_words);

        Ok(config)
    }
}
