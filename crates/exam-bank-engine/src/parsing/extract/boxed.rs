use log::debug;

use crate::models::{QuestionRecord, number_drafts};
use crate::parsing::segment::segment;

use super::{RuleSet, extract_block};

/// Extraction for the boxed layout: `Question #N ... Topic N` headers,
/// lettered options, a `Correct Answer:` line and vote footers.
pub fn extract_boxed(text: &str) -> Vec<QuestionRecord> {
    let blocks = segment(text);
    debug!("boxed: {} candidate blocks", blocks.len());

    let drafts = blocks
        .iter()
        .filter_map(|block| extract_block(block, RuleSet::BOXED))
        .collect();
    number_drafts(drafts)
}
