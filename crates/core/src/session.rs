use std::fmt;

use serde::Serialize;

use crate::error::InvalidTransition;
use crate::model::{Question, QuestionSet, QuizOutcome};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a session is in the answer / reveal / next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    /// The current question is shown and no option has been picked yet.
    AwaitingAnswer,
    /// An option was picked; correctness is visible and the quiz waits for `advance`.
    AnswerRevealed,
    /// The last question was answered and advanced past. Terminal until restart.
    Complete,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::AwaitingAnswer => "awaiting an answer",
            QuizPhase::AnswerRevealed => "the answer is revealed",
            QuizPhase::Complete => "the quiz is complete",
        };
        f.write_str(label)
    }
}

//
// ─── TRANSITION RESULTS ────────────────────────────────────────────────────────
//

/// What `submit_answer` revealed about the picked option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: String,
    pub correct_option: String,
    pub is_correct: bool,
    /// Score after this answer was counted.
    pub score: usize,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Completed(QuizOutcome),
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Read-only view of a session for renderers.
///
/// `correct_option` is only filled in once the current question has been
/// answered, so a renderer cannot leak the answer early.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSnapshot {
    pub question: String,
    pub options: Vec<String>,
    pub selected_option: Option<String>,
    pub correct_option: Option<String>,
    pub current_index: usize,
    pub total: usize,
    pub score: usize,
    pub phase: QuizPhase,
    pub is_complete: bool,
    /// `current_index / total`, for display only.
    pub progress_fraction: f64,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a fixed question list.
///
/// Mutated only through `submit_answer`, `advance` and `restart`. Out-of-turn
/// calls return `InvalidTransition` and leave every field as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: QuestionSet,
    current_index: usize,
    selected_option: Option<String>,
    score: usize,
    phase: QuizPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            current_index: 0,
            selected_option: None,
            score: 0,
            phase: QuizPhase::AwaitingAnswer,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    /// Number of questions answered so far, including the current one once revealed.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        match self.phase {
            QuizPhase::AwaitingAnswer => self.current_index,
            QuizPhase::AnswerRevealed | QuizPhase::Complete => self.current_index + 1,
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        self.current_index as f64 / self.total() as f64
    }

    /// Final score, once the session is complete.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.is_complete().then(|| QuizOutcome {
            score: self.score,
            total: self.total(),
        })
    }

    /// Pick an option for the current question and reveal whether it was right.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition::NotAwaitingAnswer` if the question was already
    /// answered or the quiz is complete, and `InvalidTransition::UnknownOption`
    /// if `option` is not one of the current question's options.
    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerFeedback, InvalidTransition> {
        if self.phase != QuizPhase::AwaitingAnswer {
            return Err(InvalidTransition::NotAwaitingAnswer { phase: self.phase });
        }

        let question = &self.questions[self.current_index];
        if !question.offers(option) {
            return Err(InvalidTransition::UnknownOption {
                option: option.to_string(),
                index: self.current_index,
            });
        }

        let is_correct = question.is_correct(option);
        let correct_option = question.correct_option().to_string();
        if is_correct {
            self.score += 1;
        }
        self.selected_option = Some(option.to_string());
        self.phase = QuizPhase::AnswerRevealed;

        Ok(AnswerFeedback {
            selected: option.to_string(),
            correct_option,
            is_correct,
            score: self.score,
        })
    }

    /// Move past a revealed answer: to the next question, or to `Complete`
    /// after the last one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition::NotRevealed` unless the current question has
    /// just been answered.
    pub fn advance(&mut self) -> Result<Advance, InvalidTransition> {
        if self.phase != QuizPhase::AnswerRevealed {
            return Err(InvalidTransition::NotRevealed { phase: self.phase });
        }

        if self.current_index == self.questions.last_index() {
            self.phase = QuizPhase::Complete;
            return Ok(Advance::Completed(QuizOutcome {
                score: self.score,
                total: self.total(),
            }));
        }

        self.current_index += 1;
        self.selected_option = None;
        self.phase = QuizPhase::AwaitingAnswer;
        Ok(Advance::Next {
            index: self.current_index,
        })
    }

    /// Back to the creation state, keeping the same questions.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected_option = None;
        self.score = 0;
        self.phase = QuizPhase::AwaitingAnswer;
    }

    #[must_use]
    pub fn state(&self) -> QuizSnapshot {
        let question = self.current_question();
        let correct_option = match self.phase {
            QuizPhase::AwaitingAnswer => None,
            QuizPhase::AnswerRevealed | QuizPhase::Complete => {
                Some(question.correct_option().to_string())
            }
        };

        QuizSnapshot {
            question: question.text().to_string(),
            options: question.options().to_vec(),
            selected_option: self.selected_option.clone(),
            correct_option,
            current_index: self.current_index,
            total: self.total(),
            score: self.score,
            phase: self.phase,
            is_complete: self.is_complete(),
            progress_fraction: self.progress_fraction(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
