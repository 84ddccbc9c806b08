// src/core/case.rs
use clap::ValueEnum;

use crate::core::analysis::tokenizer::SENTENCE_TERMINATORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    Upper,
    Lower,
    /// First letter of every word upper case, the rest lower case
    Title,
    /// First letter of every sentence upper case, the rest lower case
    Sentence,
    /// Letters alternate lower and upper case
    Alternating,
    /// Every letter swaps case
    Inverse,
}

/// Rewrites the letters of `text` in the given style. Anything that is not
/// a letter passes through unchanged.
#[inline]
#[must_use]
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Title => title_case(text),
        CaseStyle::Sentence => sentence_case(text),
        CaseStyle::Alternating => alternating_case(text),
        CaseStyle::Inverse => inverse_case(text),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start && ch.is_alphabetic() {
            word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_alphanumeric() {
                word_start = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut sentence_start = true;
    for ch in text.chars() {
        if sentence_start && ch.is_alphabetic() {
            sentence_start = false;
            out.extend(ch.to_uppercase());
            continue;
        }
        if SENTENCE_TERMINATORS.contains(&ch) {
            sentence_start = true;
        } else if ch.is_alphanumeric() {
            sentence_start = false;
        }
        out.extend(ch.to_lowercase());
    }
    out
}

fn alternating_case(text: &str) -> String {
    let mut upper = false;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
            continue;
        }
        if upper {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        upper = !upper;
    }
    out
}

fn inverse_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
