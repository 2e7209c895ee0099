use serde::{Deserialize, Serialize};

/// Explanation stored on records whose source carried none.
pub const NO_EXPLANATION: &str = "Chưa có giải thích";

/// A single multiple-choice question as served to the quiz UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// 1-based position within the store snapshot.
    pub id: u32,
    pub stem: String,
    /// Option texts in answer-letter order (A, B, C, ...).
    pub options: Vec<String>,
    /// Zero-based index into `options`. Defaults to 0 when the source had no marker.
    pub correct_answer_index: usize,
    /// Whether `correct_answer_index` came from a "Correct Answer:" line.
    #[serde(default)]
    pub has_explicit_answer: bool,
    pub explanation: String,
}

impl QuestionRecord {
    /// Letter shown next to the option at `index` (0 -> 'A').
    pub fn option_letter(index: usize) -> char {
        char::from_u32('A' as u32 + index as u32).unwrap_or('?')
    }

    /// Letter of the stored correct answer.
    pub fn correct_letter(&self) -> char {
        Self::option_letter(self.correct_answer_index)
    }

    /// True when the answer index points at an existing option.
    pub fn answer_in_range(&self) -> bool {
        self.correct_answer_index < self.options.len()
    }

    pub fn has_explanation(&self) -> bool {
        self.explanation != NO_EXPLANATION
    }
}

/// A question assembled by an extraction strategy, before numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub has_explicit_answer: bool,
    pub explanation: String,
}

impl QuestionDraft {
    pub fn into_record(self, id: u32) -> QuestionRecord {
        QuestionRecord {
            id,
            stem: self.stem,
            options: self.options,
            correct_answer_index: self.correct_answer_index,
            has_explicit_answer: self.has_explicit_answer,
            explanation: self.explanation,
        }
    }
}

/// Numbers drafts 1..N in order.
pub fn number_drafts(drafts: Vec<QuestionDraft>) -> Vec<QuestionRecord> {
    drafts
        .into_iter()
        .zip(1u32..)
        .map(|(draft, id)| draft.into_record(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(stem: &str) -> QuestionDraft {
        QuestionDraft {
            stem: stem.to_string(),
            options: vec!["one".into(), "two".into()],
            correct_answer_index: 1,
            has_explicit_answer: true,
            explanation: NO_EXPLANATION.to_string(),
        }
    }

    #[test]
    fn drafts_are_numbered_from_one() {
        let records = number_drafts(vec![draft("first"), draft("second"), draft("third")]);
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(records[2].stem, "third");
    }

    #[test]
    fn letters_follow_index() {
        assert_eq!(QuestionRecord::option_letter(0), 'A');
        assert_eq!(QuestionRecord::option_letter(3), 'D');
        let record = draft("q").into_record(1);
        assert_eq!(record.correct_letter(), 'B');
        assert!(record.answer_in_range());
        assert!(!record.has_explanation());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = draft("q").into_record(7);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["correctAnswerIndex"], 1);
        assert_eq!(json["hasExplicitAnswer"], true);
    }
}
