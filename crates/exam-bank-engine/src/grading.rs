//! Answer checking against the active question set.

use serde::{Deserialize, Serialize};

use crate::store::QuestionStore;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("Question not found: {0}")]
    QuestionNotFound(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub is_correct: bool,
    pub correct_answer_index: usize,
    pub explanation: String,
}

/// One answer in a finished quiz. `selected_index` is `None` when the
/// question was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: u32,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: u32,
    pub is_correct: bool,
    pub correct_answer_index: usize,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub score: usize,
    /// Size of the store, not of the submission list.
    pub total: usize,
    pub percentage: u32,
    pub results: Vec<QuestionResult>,
}

pub fn grade(
    store: &QuestionStore,
    question_id: u32,
    selected_index: usize,
) -> Result<GradeResult, GradeError> {
    let question = store
        .get(question_id)
        .ok_or(GradeError::QuestionNotFound(question_id))?;

    Ok(GradeResult {
        is_correct: selected_index == question.correct_answer_index,
        correct_answer_index: question.correct_answer_index,
        explanation: question.explanation.clone(),
    })
}

/// Grades a whole quiz. Any unknown question id fails the batch.
///
/// Every submission is scored, so repeating an id counts it again and
/// `score` can then exceed `total`. Callers submit each question once.
pub fn grade_all(
    store: &QuestionStore,
    submissions: &[AnswerSubmission],
) -> Result<QuizReport, GradeError> {
    let results = submissions
        .iter()
        .map(|submission| {
            let question = store
                .get(submission.question_id)
                .ok_or(GradeError::QuestionNotFound(submission.question_id))?;
            Ok(QuestionResult {
                question_id: submission.question_id,
                is_correct: submission.selected_index == Some(question.correct_answer_index),
                correct_answer_index: question.correct_answer_index,
                selected_index: submission.selected_index,
            })
        })
        .collect::<Result<Vec<_>, GradeError>>()?;

    let score = results.iter().filter(|r| r.is_correct).count();
    let total = store.len();

    Ok(QuizReport {
        score,
        total,
        percentage: percentage(score, total),
        results,
    })
}

fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn answer(question_id: u32, selected_index: Option<usize>) -> AnswerSubmission {
        AnswerSubmission {
            question_id,
            selected_index,
        }
    }

    #[rstest]
    #[case(1, 0, true)]
    #[case(1, 2, false)]
    #[case(2, 1, true)]
    fn grade_single_answer(#[case] id: u32, #[case] selected: usize, #[case] expected: bool) {
        let store = QuestionStore::seeded();
        let result = grade(&store, id, selected).unwrap();

        assert_eq!(result.is_correct, expected);
        assert_eq!(
            result.correct_answer_index,
            store.get(id).unwrap().correct_answer_index
        );
    }

    #[test]
    fn grade_unknown_question() {
        let store = QuestionStore::seeded();
        assert_eq!(grade(&store, 42, 0), Err(GradeError::QuestionNotFound(42)));
    }

    #[test]
    fn grade_all_scores_against_store_size() {
        // Given three seeded questions and two submissions, one skipped
        let store = QuestionStore::seeded();
        let submissions = [answer(1, Some(0)), answer(2, None)];

        // When grading
        let report = grade_all(&store, &submissions).unwrap();

        // Then the total is the store size and the skip never scores
        assert_eq!(report.score, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.percentage, 33);
        assert!(!report.results[1].is_correct);
    }

    #[test]
    fn grade_all_rounds_to_nearest_percent() {
        let store = QuestionStore::seeded();
        let submissions = [answer(1, Some(0)), answer(2, Some(1))];
        assert_eq!(grade_all(&store, &submissions).unwrap().percentage, 67);
    }

    #[test]
    fn grade_all_scores_every_submission() {
        // Given the same correct answer submitted twice against a one-question store
        let store = QuestionStore::seeded();
        let mut single = QuestionStore::empty();
        single.replace(store.snapshot()[..1].to_vec());
        let submissions = [answer(1, Some(0)), answer(1, Some(0))];

        // When grading
        let report = grade_all(&single, &submissions).unwrap();

        // Then both count, and the percentage is not capped
        assert_eq!((report.score, report.total), (2, 1));
        assert_eq!(report.percentage, 200);
        assert_eq!(report.results.len(), 2);
    }

    #[test]
    fn grade_all_fails_on_unknown_id() {
        let store = QuestionStore::seeded();
        let submissions = [answer(1, Some(0)), answer(9, Some(0))];
        assert_eq!(
            grade_all(&store, &submissions),
            Err(GradeError::QuestionNotFound(9))
        );
    }

    #[test]
    fn empty_store_gives_zero_percentage() {
        let report = grade_all(&QuestionStore::empty(), &[]).unwrap();
        assert_eq!((report.score, report.total, report.percentage), (0, 0, 0));
    }

    #[test]
    fn submissions_deserialize_from_camel_case() {
        let submissions: Vec<AnswerSubmission> =
            serde_json::from_str(r#"[{"questionId": 3, "selectedIndex": null}]"#).unwrap();
        assert_eq!(submissions, vec![answer(3, None)]);
    }
}
