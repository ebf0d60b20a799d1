use serde::Serialize;

/// Whether a finished quiz counts as a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Strictly more than half of the questions were answered correctly.
    Passed,
    Failed,
}

impl Verdict {
    /// Headline shown on the completion modal.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Passed => "Congratulations!",
            Verdict::Failed => "Oops!",
        }
    }
}

/// Final score of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

impl QuizOutcome {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        // score > total / 2, kept in integers so odd totals need a strict majority.
        if self.score * 2 > self.total {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict() == Verdict::Passed
    }
}
