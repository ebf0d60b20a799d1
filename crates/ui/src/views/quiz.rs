use dioxus::prelude::*;
use services::QuizIntent;

use crate::context::AppContext;
use crate::vm::{OptionVm, ScoreModalVm, map_quiz_vm};

#[cfg(test)]
use services::QuizService;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut quiz = use_signal(move || ctx.start_quiz());

    let dispatch = use_callback(move |intent: QuizIntent| {
        // Buttons are disabled out of turn; a rejection here means a stale event.
        if let Err(err) = quiz.write().apply(intent) {
            tracing::debug!(%err, "ignored quiz intent");
        }
    });
    let on_select = use_callback(move |label: String| dispatch.call(QuizIntent::Select(label)));
    let on_retry = use_callback(move |()| dispatch.call(QuizIntent::Retry));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, quiz);
            }
        }
    }

    let vm = map_quiz_vm(&quiz.read().state());
    let progress_style = vm.progress_style();

    rsx! {
        div { class: "page quiz",
            div { class: "quiz-progress",
                div { class: "quiz-progress-fill", style: "{progress_style}" }
            }

            div { class: "quiz-counter",
                span { class: "quiz-counter-current", "{vm.position}" }
                span { class: "quiz-counter-total", "/ {vm.total}" }
            }
            p { class: "quiz-question", "{vm.question}" }

            div { class: "quiz-options",
                for option in vm.options.iter().cloned() {
                    OptionButton {
                        key: "{option.label}",
                        option: option.clone(),
                        on_select: on_select,
                    }
                }
            }

            if vm.show_next {
                button {
                    id: "quiz-next",
                    class: "btn quiz-next",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Next),
                    "Next"
                }
            }

            if let Some(modal) = vm.score_modal.clone() {
                ScoreModal { modal: modal, on_retry: on_retry }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_select: Callback<String>) -> Element {
    let label = option.label.clone();
    let class = option.feedback.class();
    let icon = option.feedback.icon();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_select.call(label.clone()),
            span { class: "quiz-option-label", "{option.label}" }
            if let Some(icon) = icon {
                span { class: "quiz-option-status", "{icon}" }
            }
        }
    }
}

#[component]
fn ScoreModal(modal: ScoreModalVm, on_retry: Callback<()>) -> Element {
    let score_class = modal.score_class();

    rsx! {
        div { class: "quiz-modal-overlay",
            div { class: "quiz-modal",
                h3 { class: "quiz-modal-title", "{modal.headline}" }
                div { class: "quiz-modal-score",
                    span { class: "{score_class}", "{modal.score}" }
                    span { class: "quiz-modal-score-total", "/ {modal.total}" }
                }
                button {
                    id: "quiz-retry",
                    class: "btn quiz-retry",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry Quiz"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizService>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, quiz: Signal<QuizService>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizService> {
        (*self.quiz.borrow()).expect("quiz signal registered")
    }
}
