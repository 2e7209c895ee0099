pub mod grading;
pub mod ingest;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use grading::{AnswerSubmission, GradeError, GradeResult, QuestionResult, QuizReport, grade, grade_all};
pub use ingest::{UploadSummary, ingest};
pub use io::{IoError, load_source};
pub use models::{NO_EXPLANATION, QuestionRecord};
pub use parsing::{ParseOutcome, Strategy, parse, parse_questions};
pub use render::{RichBlock, render_explanation, render_stem};
pub use store::QuestionStore;
