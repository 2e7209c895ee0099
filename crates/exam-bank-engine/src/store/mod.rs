use log::info;

use crate::models::{QuestionRecord, sample_questions};

/// The active question set. Replaced wholesale after a successful parse.
///
/// Not synchronised: callers that share it across threads wrap it themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<QuestionRecord>,
}

impl QuestionStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store holding the built-in sample questions.
    pub fn seeded() -> Self {
        Self {
            questions: sample_questions(),
        }
    }

    /// Replaces every record. An empty `questions` leaves the store untouched
    /// and returns `false`.
    pub fn replace(&mut self, questions: Vec<QuestionRecord>) -> bool {
        if questions.is_empty() {
            return false;
        }
        info!(
            "replacing {} stored questions with {}",
            self.questions.len(),
            questions.len()
        );
        self.questions = questions;
        true
    }

    pub fn snapshot(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn get(&self, id: u32) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
