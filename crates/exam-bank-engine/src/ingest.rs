//! Upload handling: parse extracted text and swap it into the store.

use log::warn;
use serde::Serialize;

use crate::models::QuestionRecord;
use crate::parsing::{Strategy, parse};
use crate::store::QuestionStore;

/// Records included in the upload confirmation.
pub const PREVIEW_LEN: usize = 2;
/// Characters of raw input echoed back for troubleshooting.
pub const RAW_PREVIEW_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub questions_count: usize,
    pub preview: Vec<QuestionRecord>,
    pub raw_text_preview: String,
    pub strategy: Option<Strategy>,
    /// Whether the store now holds the parsed records.
    pub replaced: bool,
}

/// Parses `text` and, when anything was found, replaces the store with it.
pub fn ingest(store: &mut QuestionStore, text: &str) -> UploadSummary {
    let outcome = parse(text);
    let questions_count = outcome.questions.len();
    let preview = outcome.questions.iter().take(PREVIEW_LEN).cloned().collect();

    let replaced = store.replace(outcome.questions);
    if !replaced {
        warn!("no questions found in uploaded text; keeping the current set");
    }

    UploadSummary {
        questions_count,
        preview,
        raw_text_preview: text.chars().take(RAW_PREVIEW_CHARS).collect(),
        strategy: outcome.strategy,
        replaced,
    }
}
