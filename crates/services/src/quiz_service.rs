use chrono::{DateTime, Duration, Utc};
use std::fmt;

use quiz_core::model::{QuestionSet, QuizOutcome};
use quiz_core::{Advance, AnswerFeedback, Clock, InvalidTransition, QuizSession, QuizSnapshot};

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

/// A user action from any presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Next,
    Retry,
}

/// What applying an intent changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Answered(AnswerFeedback),
    Advanced(Advance),
    Restarted,
}

//
// ─── COMPLETED QUIZ ────────────────────────────────────────────────────────────
//

/// A finished run with its timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletedQuiz {
    pub outcome: QuizOutcome,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl CompletedQuiz {
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Drives a `QuizSession` for a presentation layer.
///
/// Transitions keep the session's semantics and errors; the service adds
/// start/finish timestamps and logging.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    session: QuizSession,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: QuestionSet, clock: Clock) -> Self {
        let started_at = clock.now();
        tracing::debug!(questions = questions.len(), "quiz started");
        Self {
            clock,
            session: QuizSession::new(questions),
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> QuizSnapshot {
        self.session.state()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed(&self) -> Option<CompletedQuiz> {
        let outcome = self.session.outcome()?;
        let completed_at = self.completed_at?;
        Some(CompletedQuiz {
            outcome,
            started_at: self.started_at,
            completed_at,
        })
    }

    /// # Errors
    ///
    /// Returns `InvalidTransition` when the current question is not awaiting an
    /// answer or does not offer `option`.
    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerFeedback, InvalidTransition> {
        let index = self.session.current_index();
        match self.session.submit_answer(option) {
            Ok(feedback) => {
                tracing::debug!(
                    index,
                    correct = feedback.is_correct,
                    score = feedback.score,
                    "answer submitted"
                );
                Ok(feedback)
            }
            Err(err) => {
                tracing::warn!(index, %err, "answer rejected");
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidTransition` unless an answer has just been revealed.
    pub fn advance(&mut self) -> Result<Advance, InvalidTransition> {
        let advance = self.session.advance().inspect_err(|err| {
            tracing::warn!(%err, "advance rejected");
        })?;

        match advance {
            Advance::Next { index } => tracing::debug!(index, "moved to next question"),
            Advance::Completed(outcome) => {
                self.completed_at = Some(self.clock.now());
                tracing::info!(
                    score = outcome.score,
                    total = outcome.total,
                    passed = outcome.passed(),
                    "quiz completed"
                );
            }
        }
        Ok(advance)
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.started_at = self.clock.now();
        self.completed_at = None;
        tracing::info!("quiz restarted");
    }

    /// Apply a UI intent to the matching transition.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidTransition` from `submit_answer` or `advance`.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<IntentOutcome, InvalidTransition> {
        match intent {
            QuizIntent::Select(option) => self.submit_answer(&option).map(IntentOutcome::Answered),
            QuizIntent::Next => self.advance().map(IntentOutcome::Advanced),
            QuizIntent::Retry => {
                self.restart();
                Ok(IntentOutcome::Restarted)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("total", &self.session.total())
            .field("current_index", &self.session.current_index())
            .field("phase", &self.session.phase())
            .field("score", &self.session.score())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
