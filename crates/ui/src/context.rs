use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::QuestionSet;
use services::QuizService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn questions(&self) -> QuestionSet;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    questions: QuestionSet,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            clock: app.clock(),
        }
    }

    /// A fresh quiz over the app's question set.
    #[must_use]
    pub fn start_quiz(&self) -> QuizService {
        QuizService::new(self.questions.clone(), self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
