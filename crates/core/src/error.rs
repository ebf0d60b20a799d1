use thiserror::Error;

use crate::session::QuizPhase;

/// A quiz operation was called out of turn or with an option the current
/// question does not offer.
///
/// The session is left untouched whenever this is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidTransition {
    #[error("cannot submit an answer while {phase}")]
    NotAwaitingAnswer { phase: QuizPhase },

    #[error("option {option:?} is not offered by question {index}")]
    UnknownOption { option: String, index: usize },

    #[error("cannot advance while {phase}")]
    NotRevealed { phase: QuizPhase },
}
