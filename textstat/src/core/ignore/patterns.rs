// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use std::path::Path;

#[derive(Debug)]
struct Rule {
    pattern: Pattern,
    /// `!pattern` re-includes paths an earlier rule ignored.
    negated: bool,
}

/// Gitignore-style patterns, matched against paths relative to the scan root.
#[derive(Debug, Default)]
pub struct Patterns {
    rules: Vec<Rule>,
}

impl Patterns {
    /// Adds one line of an ignore file.
    ///
    /// Supports `!` negation, `/` anchoring to the scan root, trailing `/`
    /// for directories and a single `{a,b}` alternation group. As in
    /// `.gitignore`, a pattern with a slash before its end is anchored too. Blank lines
    /// and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The pattern contains invalid glob syntax
    /// * An alternation group is missing its closing brace
    #[inline]
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (body, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let (body, anchored) = body
            .strip_prefix('/')
            .map_or((body, false), |rest| (rest, true));

        let (body, directory) = body
            .strip_suffix('/')
            .map_or((body, false), |dir| (dir, true));
        // A slash inside the pattern ties it to the scan root.
        let anchored = anchored || body.contains('/');

        let glob = if directory {
            format!("{body}/**")
        } else {
            body.to_owned()
        };
        let glob = if anchored || glob.starts_with("**") {
            glob
        } else {
            format!("**/{glob}")
        };

        for expanded in expand_alternation(&glob)? {
            let pattern = Pattern::new(&expanded)
                .with_context(|| format!("Invalid ignore pattern: {line}"))?;
            self.rules.push(Rule { pattern, negated });
        }
        Ok(())
    }

    /// The last rule that matches decides, as in `.gitignore`.
    #[inline]
    #[must_use]
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();

        self.rules
            .iter()
            .rev()
            .find(|rule| rule.pattern.matches(&path_str))
            .is_some_and(|rule| !rule.negated)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn expand_alternation(glob: &str) -> Result<Vec<String>> {
    let Some((prefix, rest)) = glob.split_once('{') else {
        return Ok(vec![glob.to_owned()]);
    };
    let Some((choices, suffix)) = rest.split_once('}') else {
        bail!("Unclosed '{{' in ignore pattern: {glob}");
    };

    Ok(choices
        .split(',')
        .map(|choice| format!("{prefix}{}{suffix}", choice.trim()))
        .collect())
}
