//! # Field Extraction
//!
//! Turns one block of extracted text into a question draft.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): every trimmed line gets a `LineKind`
//!    from local facts only (option marker, answer marker, vote annotation, ...)
//! 2. **Question Assembly** (`builder`): a `QuestionBuilder` walks the lines
//!    through the stem / options / explanation sections and validates the result
//!
//! ## Strategies
//!
//! - **`boxed`**: header-anchored blocks, full rule set
//! - **`simple_numbered`**: line-anchored `1.` / `Question` openers
//! - **`table_section`**: blank-line sections with a reduced rule set
//!
//! A block yields a draft only with a non-empty stem and at least two options.

pub mod boxed;
pub mod builder;
pub mod classify;
pub mod simple_numbered;
pub mod table_section;

pub use boxed::extract_boxed;
pub use builder::{QuestionBuilder, REFERENCE_LABEL, Section};
pub use classify::{LineClass, LineKind, QuestionLineClassifier, RuleSet};
pub use simple_numbered::extract_simple_numbered;
pub use table_section::extract_table_sections;

use crate::models::QuestionDraft;

/// Runs the shared classification loop over one block.
pub fn extract_block(block: &str, rules: RuleSet) -> Option<QuestionDraft> {
    let classifier = QuestionLineClassifier::new(rules);
    let mut builder = QuestionBuilder::new();

    for line in classify::content_lines(block) {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}
