// src/core/analysis/syllables.rs
//! Heuristic syllable estimate. It is deliberately approximate: the counts
//! match the word-counter tools this engine replaces, not a dictionary.

const VOWELS: &str = "aeiouy";
/// Characters that keep a trailing `e`/`es` audible.
const SUFFIX_GUARD: &str = "laeiouy";

/// Estimates syllables in a lowercase word. Always returns at least 1.
#[inline]
#[must_use]
pub fn estimate_syllables(word: &str) -> usize {
    if word.chars().count() <= 3 {
        return 1;
    }

    let stem = strip_silent_suffix(word);
    let stem = stem.strip_prefix('y').unwrap_or(stem);

    count_vowel_runs(stem).max(1)
}

/// Removes one trailing `[^laeiouy]es`, `ed` or `[^laeiouy]e`.
fn strip_silent_suffix(word: &str) -> &str {
    if let Some(stem) = word.strip_suffix("es").and_then(strip_unguarded_last) {
        return stem;
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return stem;
    }
    word.strip_suffix('e')
        .and_then(strip_unguarded_last)
        .unwrap_or(word)
}

fn strip_unguarded_last(stem: &str) -> Option<&str> {
    let last = stem.chars().next_back()?;
    if SUFFIX_GUARD.contains(last) {
        return None;
    }
    stem.get(..stem.len() - last.len_utf8())
}

fn count_vowel_runs(word: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for ch in word.chars() {
        let is_vowel = VOWELS.contains(ch);
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }
    runs
}
