pub mod extract;
pub mod normalize;
pub mod segment;

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::models::QuestionRecord;

use extract::{extract_boxed, extract_simple_numbered, extract_table_sections};
use normalize::unify_line_breaks;

/// The extraction strategy that produced a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    Boxed,
    SimpleNumbered,
    TableSection,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Boxed => "boxed",
            Strategy::SimpleNumbered => "simple-numbered",
            Strategy::TableSection => "table-section",
        };
        f.write_str(name)
    }
}

type StrategyFn = fn(&str) -> Vec<QuestionRecord>;

/// Strategies in fallback order. The first non-empty result wins outright.
const FALLBACK_CHAIN: [(Strategy, StrategyFn); 3] = [
    (Strategy::Boxed, extract_boxed),
    (Strategy::SimpleNumbered, extract_simple_numbered),
    (Strategy::TableSection, extract_table_sections),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Records numbered 1..N in source order.
    pub questions: Vec<QuestionRecord>,
    /// `None` when every strategy came back empty.
    pub strategy: Option<Strategy>,
}

/// Parses extracted PDF text into question records.
///
/// Never fails: unparseable input yields an empty outcome.
pub fn parse(text: &str) -> ParseOutcome {
    let text = unify_line_breaks(text);

    for (strategy, run) in FALLBACK_CHAIN {
        let questions = run(&text);
        if !questions.is_empty() {
            info!("{strategy} strategy parsed {} questions", questions.len());
            return ParseOutcome {
                questions,
                strategy: Some(strategy),
            };
        }
        debug!("{strategy} strategy found no questions");
    }

    ParseOutcome {
        questions: vec![],
        strategy: None,
    }
}

/// Convenience: the records of [`parse`] without the strategy.
pub fn parse_questions(text: &str) -> Vec<QuestionRecord> {
    parse(text).questions
}
