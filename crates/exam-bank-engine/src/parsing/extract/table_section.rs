use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::{QuestionRecord, number_drafts};
use crate::parsing::segment::blank_line_sections;

use super::{RuleSet, classify::content_lines, classify::looks_like_option, extract_block};

static QUESTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Question\s*#?\s*\d+").expect("question header regex"));
static ANSWER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Correct\s*Answer").expect("answer mention regex"));

/// A stem-like line is at least this long and asks something.
const LONG_STEM_CHARS: usize = 50;

/// Extraction over blank-line separated sections, for layouts where each
/// question sits in its own box without reliable headers.
///
/// A section is only considered when it shows a header or long question line,
/// at least one option line and a correct-answer line.
pub fn extract_table_sections(text: &str) -> Vec<QuestionRecord> {
    let sections = blank_line_sections(text);
    debug!("table-section: {} sections", sections.len());

    let drafts = sections
        .into_iter()
        .filter(|section| looks_like_question_section(section))
        .filter_map(|section| extract_block(section, RuleSet::TABLE_SECTION))
        .collect();
    number_drafts(drafts)
}

fn looks_like_question_section(section: &str) -> bool {
    let mut has_stem = false;
    let mut has_option = false;
    let mut has_answer = false;

    for line in content_lines(section) {
        if QUESTION_HEADER.is_match(line)
            || (line.chars().count() > LONG_STEM_CHARS && line.contains('?'))
        {
            has_stem = true;
        }
        has_option |= looks_like_option(line);
        has_answer |= ANSWER_MENTION.is_match(line);
    }

    has_stem && has_option && has_answer
}
