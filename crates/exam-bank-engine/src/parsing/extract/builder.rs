use log::{debug, warn};

use crate::models::{NO_EXPLANATION, QuestionDraft};
use crate::parsing::normalize::clean_stem;

use super::classify::{LineClass, LineKind};

/// Label under which reference lines are appended to an explanation.
pub const REFERENCE_LABEL: &str = "Tham khảo:";

/// Which part of a question the scan believes it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Before the first option line.
    Stem,
    /// After the first option line, before any answer marker.
    Options,
    /// After a `Correct Answer:` line.
    Explanation,
}

/// Assembles one question from classified lines.
///
/// Each section has its own handler, so the same line kind can mean different
/// things depending on where the scan is. Once options start the builder never
/// returns to stem collection.
#[derive(Debug)]
pub struct QuestionBuilder {
    section: Section,
    stem_buf: String,
    stem: Option<String>,
    options: Vec<String>,
    /// An option marker had no text on its own line.
    option_pending: bool,
    correct_answer_index: usize,
    has_explicit_answer: bool,
    explanation: String,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self {
            section: Section::Stem,
            stem_buf: String::new(),
            stem: None,
            options: vec![],
            option_pending: false,
            correct_answer_index: 0,
            has_explicit_answer: false,
            explanation: String::new(),
        }
    }

    /// Starts the stem with text found on a block-start line.
    pub fn with_stem_seed(seed: &str) -> Self {
        let mut builder = Self::new();
        append_spaced(&mut builder.stem_buf, seed.trim());
        builder
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn push(&mut self, line: &LineClass) {
        match self.section {
            Section::Stem => self.push_stem_line(line),
            Section::Options => self.push_options_line(line),
            Section::Explanation => self.push_explanation_line(line),
        }
    }

    pub fn finish(mut self) -> Option<QuestionDraft> {
        if self.stem.is_none() && !self.stem_buf.is_empty() {
            self.freeze_stem();
        }
        let stem = self.stem.unwrap_or_default();

        if stem.is_empty() || self.options.len() < 2 {
            debug!(
                "dropping candidate: stem {} chars, {} options",
                stem.chars().count(),
                self.options.len()
            );
            return None;
        }
        if self.has_explicit_answer && self.correct_answer_index >= self.options.len() {
            warn!(
                "answer index {} is outside {} options for \"{}\"",
                self.correct_answer_index,
                self.options.len(),
                preview(&stem)
            );
        }

        let explanation = self.explanation.trim();
        Some(QuestionDraft {
            stem,
            options: self.options,
            correct_answer_index: self.correct_answer_index,
            has_explicit_answer: self.has_explicit_answer,
            explanation: if explanation.is_empty() {
                NO_EXPLANATION.to_string()
            } else {
                explanation.to_string()
            },
        })
    }

    fn push_stem_line(&mut self, line: &LineClass) {
        match &line.kind {
            LineKind::HeaderNoise | LineKind::CommunityVote | LineKind::Separator => {}
            LineKind::Option { text } => {
                self.freeze_stem();
                self.section = Section::Options;
                self.add_option(text);
            }
            LineKind::CorrectAnswer { index, trailing } => self.enter_explanation(*index, trailing),
            LineKind::TableFragment
            | LineKind::Reference { .. }
            | LineKind::Url
            | LineKind::Text => append_spaced(&mut self.stem_buf, &line.text),
        }
    }

    fn push_options_line(&mut self, line: &LineClass) {
        match &line.kind {
            LineKind::Option { text } => self.add_option(text),
            LineKind::CorrectAnswer { index, trailing } => self.enter_explanation(*index, trailing),
            LineKind::Text | LineKind::Url | LineKind::Reference { .. } if self.option_pending => {
                self.add_option(&line.text);
            }
            _ => {}
        }
    }

    fn push_explanation_line(&mut self, line: &LineClass) {
        match &line.kind {
            LineKind::HeaderNoise
            | LineKind::CommunityVote
            | LineKind::Separator
            | LineKind::TableFragment => {}
            LineKind::Option { text } => self.add_option(text),
            // A later answer marker wins; its text replaces what was collected.
            LineKind::CorrectAnswer { index, trailing } => {
                self.correct_answer_index = *index;
                if !trailing.is_empty() {
                    self.explanation = trailing.clone();
                }
            }
            LineKind::Reference { text } => {
                if !text.is_empty() {
                    let sep = if self.explanation.is_empty() { "" } else { "\n\n" };
                    self.explanation
                        .push_str(&format!("{sep}{REFERENCE_LABEL} {text}"));
                }
            }
            LineKind::Url => {
                let sep = if self.explanation.is_empty() { "" } else { "\n" };
                self.explanation
                    .push_str(&format!("{sep}{REFERENCE_LABEL} {}", line.text));
            }
            LineKind::Text => append_spaced(&mut self.explanation, &line.text),
        }
    }

    fn freeze_stem(&mut self) {
        if self.stem.is_none() && !self.stem_buf.is_empty() {
            self.stem = Some(clean_stem(&self.stem_buf));
        }
    }

    fn add_option(&mut self, text: &str) {
        if text.is_empty() {
            self.option_pending = true;
        } else {
            self.options.push(text.to_string());
            self.option_pending = false;
        }
    }

    fn enter_explanation(&mut self, index: usize, trailing: &str) {
        self.correct_answer_index = index;
        self.has_explicit_answer = true;
        self.section = Section::Explanation;
        append_spaced(&mut self.explanation, trailing);
    }
}

impl Default for QuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn append_spaced(buf: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(text);
}

fn preview(text: &str) -> String {
    text.chars().take(60).collect()
}
