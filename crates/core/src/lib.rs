#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::InvalidTransition;
pub use session::{Advance, AnswerFeedback, QuizPhase, QuizSession, QuizSnapshot};
pub use time::Clock;
