mod outcome;
mod question;

pub use outcome::{QuizOutcome, Verdict};
pub use question::{Question, QuestionError, QuestionSet, QuestionSetError};
