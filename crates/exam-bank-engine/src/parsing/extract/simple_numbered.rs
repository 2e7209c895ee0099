use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::{QuestionDraft, QuestionRecord, number_drafts};

use super::{QuestionBuilder, QuestionLineClassifier, RuleSet, classify::content_lines};

static NUMBERED_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s*(.*)$").expect("numbered start regex"));
static QUESTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Question\b\s*#?\s*\d*\s*[:.)]?\s*(?:Topic\s*\d+)?\s*(.*)$")
        .expect("question start regex")
});

/// Extraction for plainly numbered layouts (`1.` / `2)` / `Question ...`).
///
/// Works over the whole text line by line: a numbered or `Question` line opens
/// a new question and whatever follows the marker on that line seeds its stem.
/// Lines before the first opener are ignored.
pub fn extract_simple_numbered(text: &str) -> Vec<QuestionRecord> {
    let classifier = QuestionLineClassifier::new(RuleSet::SIMPLE_NUMBERED);
    let mut drafts: Vec<QuestionDraft> = vec![];
    let mut current: Option<QuestionBuilder> = None;

    for line in content_lines(text) {
        if let Some(seed) = block_start_seed(line) {
            if let Some(done) = current.take().and_then(QuestionBuilder::finish) {
                drafts.push(done);
            }
            current = Some(QuestionBuilder::with_stem_seed(seed));
            continue;
        }
        if let Some(builder) = current.as_mut() {
            builder.push(&classifier.classify(line));
        }
    }
    if let Some(done) = current.and_then(QuestionBuilder::finish) {
        drafts.push(done);
    }

    debug!("simple-numbered: {} questions", drafts.len());
    number_drafts(drafts)
}

/// Returns the stem text carried on a question-opening line, if it is one.
fn block_start_seed(line: &str) -> Option<&str> {
    NUMBERED_START
        .captures(line)
        .or_else(|| QUESTION_START.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
