pub mod question;
pub mod seed;

pub use question::{NO_EXPLANATION, QuestionDraft, QuestionRecord, number_drafts};
pub use seed::sample_questions;
