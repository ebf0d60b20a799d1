use quiz_core::model::QuizOutcome;
use quiz_core::{QuizPhase, QuizSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionFeedback {
    Neutral,
    Correct,
    Incorrect,
}

impl OptionFeedback {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionFeedback::Neutral => "quiz-option",
            OptionFeedback::Correct => "quiz-option quiz-option--correct",
            OptionFeedback::Incorrect => "quiz-option quiz-option--incorrect",
        }
    }

    #[must_use]
    pub fn icon(self) -> Option<&'static str> {
        match self {
            OptionFeedback::Neutral => None,
            OptionFeedback::Correct => Some("✓"),
            OptionFeedback::Incorrect => Some("✕"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub feedback: OptionFeedback,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreModalVm {
    pub headline: &'static str,
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

impl From<QuizOutcome> for ScoreModalVm {
    fn from(outcome: QuizOutcome) -> Self {
        Self {
            headline: outcome.verdict().headline(),
            score: outcome.score,
            total: outcome.total,
            passed: outcome.passed(),
        }
    }
}

impl ScoreModalVm {
    #[must_use]
    pub fn score_class(&self) -> &'static str {
        if self.passed {
            "quiz-modal-score-value quiz-modal-score-value--passed"
        } else {
            "quiz-modal-score-value quiz-modal-score-value--failed"
        }
    }
}

/// Everything the quiz screen renders for one snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<OptionVm>,
    pub show_next: bool,
    pub progress_percent: f64,
    pub score_modal: Option<ScoreModalVm>,
}

impl QuizVm {
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {:.1}%;", self.progress_percent)
    }
}

fn feedback_for(option: &str, snapshot: &QuizSnapshot) -> OptionFeedback {
    if snapshot.phase == QuizPhase::AwaitingAnswer {
        return OptionFeedback::Neutral;
    }
    if snapshot.correct_option.as_deref() == Some(option) {
        OptionFeedback::Correct
    } else if snapshot.selected_option.as_deref() == Some(option) {
        OptionFeedback::Incorrect
    } else {
        OptionFeedback::Neutral
    }
}

#[must_use]
pub fn map_quiz_vm(snapshot: &QuizSnapshot) -> QuizVm {
    let answered = snapshot.phase != QuizPhase::AwaitingAnswer;
    let options = snapshot
        .options
        .iter()
        .map(|label| OptionVm {
            label: label.clone(),
            feedback: feedback_for(label, snapshot),
            disabled: answered,
        })
        .collect();

    // The bar fills up once the last answer is in.
    let progress_percent = if snapshot.is_complete {
        100.0
    } else {
        snapshot.progress_fraction * 100.0
    };

    let score_modal = snapshot.is_complete.then(|| {
        ScoreModalVm::from(QuizOutcome {
            score: snapshot.score,
            total: snapshot.total,
        })
    });

    QuizVm {
        position: snapshot.current_index + 1,
        total: snapshot.total,
        question: snapshot.question.clone(),
        options,
        show_next: snapshot.phase == QuizPhase::AnswerRevealed,
        progress_percent,
        score_modal,
    }
}
