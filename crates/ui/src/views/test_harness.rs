use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::Clock;
use quiz_core::model::{Question, QuestionSet};
use quiz_core::time::fixed_clock;
use services::QuizIntent;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    questions: QuestionSet,
}

impl UiApp for TestApp {
    fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Dispatch an intent through the view's callback and re-render.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn score(&self) -> usize {
        let quiz = self.handles.quiz();
        self.dom.in_runtime(|| quiz.peek().session().score())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Two questions: "Capital of France?" (Paris) and "2 + 2?" (4).
pub fn sample_questions() -> QuestionSet {
    QuestionSet::new(vec![
        Question::new(
            "Capital of France?",
            vec!["Paris".to_string(), "Rome".to_string(), "Madrid".to_string()],
            "Paris",
        )
        .expect("valid question"),
        Question::new(
            "2 + 2?",
            vec!["3".to_string(), "4".to_string()],
            "4",
        )
        .expect("valid question"),
    ])
    .expect("non-empty set")
}

pub fn setup_view_harness(questions: QuestionSet) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app: Arc::new(TestApp { questions }),
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
