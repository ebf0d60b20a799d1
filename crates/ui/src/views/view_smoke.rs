use services::QuizIntent;

use super::test_harness::{sample_questions, setup_view_harness};

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(sample_questions());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Capital of France?"), "missing question in {html}");
    assert!(html.contains("/ 2"), "missing counter total in {html}");
    for option in ["Paris", "Rome", "Madrid"] {
        assert!(html.contains(option), "missing option {option} in {html}");
    }
    assert!(html.contains("width: 0.0%;"), "missing empty progress in {html}");
    assert!(!html.contains("quiz-next"), "next shown too early in {html}");
    assert!(!html.contains("quiz-modal"), "modal shown too early in {html}");
    assert!(!html.contains("quiz-option--correct"), "answer leaked in {html}");
}

#[test]
fn quiz_view_smoke_reveals_wrong_answer() {
    let mut harness = setup_view_harness(sample_questions());
    harness.rebuild();

    harness.dispatch(QuizIntent::Select("Rome".to_string()));
    let html = harness.render();

    assert!(html.contains("quiz-option--incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing right mark in {html}");
    assert!(html.contains("quiz-next"), "missing next button in {html}");
    assert_eq!(harness.score(), 0);
}

#[test]
fn quiz_view_smoke_ignores_second_answer() {
    let mut harness = setup_view_harness(sample_questions());
    harness.rebuild();

    harness.dispatch(QuizIntent::Select("Paris".to_string()));
    harness.dispatch(QuizIntent::Select("Paris".to_string()));

    assert_eq!(harness.score(), 1);
    let html = harness.render();
    assert!(!html.contains("quiz-option--incorrect"), "unexpected wrong mark in {html}");
}

#[test]
fn quiz_view_smoke_completes_and_retries() {
    let mut harness = setup_view_harness(sample_questions());
    harness.rebuild();

    harness.dispatch(QuizIntent::Select("Paris".to_string()));
    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("2 + 2?"), "missing second question in {html}");
    assert!(html.contains("width: 50.0%;"), "missing half progress in {html}");

    harness.dispatch(QuizIntent::Select("4".to_string()));
    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Congratulations!"), "missing headline in {html}");
    assert!(html.contains("Retry Quiz"), "missing retry button in {html}");
    assert!(html.contains("quiz-modal-score-value--passed"), "missing pass style in {html}");
    assert!(html.contains("width: 100.0%;"), "missing full progress in {html}");

    harness.dispatch(QuizIntent::Retry);
    let html = harness.render();
    assert!(!html.contains("quiz-modal"), "modal still open in {html}");
    assert!(html.contains("Capital of France?"), "not back at start in {html}");
    assert_eq!(harness.score(), 0);
}

#[test]
fn quiz_view_smoke_shows_oops_when_failing() {
    let mut harness = setup_view_harness(sample_questions());
    harness.rebuild();

    for pick in ["Madrid", "3"] {
        harness.dispatch(QuizIntent::Select(pick.to_string()));
        harness.dispatch(QuizIntent::Next);
    }

    let html = harness.render();
    assert!(html.contains("Oops!"), "missing headline in {html}");
    assert!(html.contains("quiz-modal-score-value--failed"), "missing fail style in {html}");
}
