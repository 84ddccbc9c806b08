// src/core/analysis/tokenizer.rs
//! Splits raw text into words, sentences and paragraphs. Every function
//! borrows from the input and never fails.

pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Whitespace-delimited tokens. Empty or all-whitespace input yields none.
#[inline]
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Trimmed, non-empty segments that end in a run of `.`, `!` or `?`.
///
/// Text after the last terminator is not a sentence, so `"Hello world"`
/// has zero sentences. This is a known limitation kept for compatibility
/// with the counting used elsewhere.
#[inline]
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = text.split(SENTENCE_TERMINATORS).collect();
    // The final segment is whatever follows the last terminator.
    segments.pop();
    segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Sentence spans with their terminators kept, plus any unterminated
/// trailing text. Used where dropping the last line would lose content.
#[must_use]
pub fn sentence_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !SENTENCE_TERMINATORS.contains(&ch) {
            continue;
        }
        let mut end = index + ch.len_utf8();
        while let Some(&(next_index, next)) = chars.peek() {
            if !SENTENCE_TERMINATORS.contains(&next) {
                break;
            }
            end = next_index + next.len_utf8();
            chars.next();
        }
        push_span(&mut spans, &text[start..end]);
        start = end;
    }
    push_span(&mut spans, &text[start..]);

    spans
}

fn push_span<'a>(spans: &mut Vec<&'a str>, span: &'a str) {
    let span = span.trim();
    if !span.trim_matches(SENTENCE_TERMINATORS).trim().is_empty() {
        spans.push(span);
    }
}

/// Trimmed blocks separated by one or more blank lines. A line holding only
/// whitespace counts as blank.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some((start, end)) = current.take() {
                paragraphs.push(text[start..end].trim());
            }
        } else {
            let start = current.map_or(offset, |(start, _)| start);
            current = Some((start, offset + line.len()));
        }
        offset += line.len();
    }
    if let Some((start, end)) = current {
        paragraphs.push(text[start..end].trim());
    }

    paragraphs
}
