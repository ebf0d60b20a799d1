#![forbid(unsafe_code)]

pub mod quiz_service;

pub use quiz_core::Clock;
pub use quiz_service::{CompletedQuiz, IntentOutcome, QuizIntent, QuizService};
