//! Splits raw text into per-question blocks.

use std::sync::LazyLock;

use regex::Regex;

/// Blocks shorter than this (in characters, after trimming) are noise.
pub const MIN_BLOCK_CHARS: usize = 30;

static QUESTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bQuestion\s*#?\s*\d+").expect("question header regex"));
static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.").expect("numbered line regex"));
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line regex"));

/// Splits text into question blocks.
///
/// Tries header anchors (`Question #N`), then numeric line anchors (`N.`),
/// then the whole text; the first producing a block wins.
pub fn segment(text: &str) -> Vec<&str> {
    let by_header = header_anchored(text);
    if !by_header.is_empty() {
        return by_header;
    }
    let by_number = numeric_anchored(text);
    if !by_number.is_empty() {
        return by_number;
    }
    keep_substantial(std::iter::once(text))
}

/// Blocks starting at every `Question #N` occurrence, anywhere in the text.
pub fn header_anchored(text: &str) -> Vec<&str> {
    anchored(text, QUESTION_HEADER.find_iter(text).map(|m| m.start()))
}

/// Blocks starting at every line that opens with `N.`.
pub fn numeric_anchored(text: &str) -> Vec<&str> {
    anchored(text, NUMBERED_LINE.find_iter(text).map(|m| m.start()))
}

/// Non-empty sections separated by blank lines.
pub fn blank_line_sections(text: &str) -> Vec<&str> {
    BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn anchored(text: &str, starts: impl Iterator<Item = usize>) -> Vec<&str> {
    let starts: Vec<usize> = starts.collect();
    let ends = starts.iter().skip(1).copied().chain(std::iter::once(text.len()));
    keep_substantial(starts.iter().zip(ends).map(|(&start, end)| &text[start..end]))
}

fn keep_substantial<'a>(blocks: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    blocks
        .map(str::trim)
        .filter(|b| b.chars().count() >= MIN_BLOCK_CHARS)
        .collect()
}
