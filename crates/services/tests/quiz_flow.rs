use quiz_core::model::{Question, QuestionSet, QuizOutcome, Verdict};
use quiz_core::time::fixed_now;
use quiz_core::{Advance, InvalidTransition, QuizPhase, dataset};
use services::{Clock, IntentOutcome, QuizIntent, QuizService};

fn abc_question(text: &str, correct: &str) -> Question {
    let options = ["A", "B", "C"].iter().map(ToString::to_string).collect();
    Question::new(text, options, correct).unwrap()
}

#[test]
fn quiz_flow_runs_worked_example_to_completion() {
    let questions = QuestionSet::new(vec![
        abc_question("Q1", "B"),
        abc_question("Q2", "A"),
        abc_question("Q3", "A"),
    ])
    .unwrap();
    let mut service = QuizService::new(questions, Clock::fixed(fixed_now()));

    for (pick, expected_score) in [("B", 1), ("C", 1), ("A", 2)] {
        let feedback = service.submit_answer(pick).unwrap();
        assert_eq!(feedback.score, expected_score);
        assert_eq!(service.state().phase, QuizPhase::AnswerRevealed);
        service.advance().unwrap();
    }

    let state = service.state();
    assert!(state.is_complete);
    assert_eq!(state.score, 2);

    let completed = service.completed().expect("completed");
    assert_eq!(completed.outcome, QuizOutcome { score: 2, total: 3 });
    assert_eq!(completed.outcome.verdict(), Verdict::Passed);
}

#[test]
fn quiz_flow_over_builtin_questions_with_intents() {
    let questions = dataset::builtin().unwrap();
    let total = questions.len();
    let mut service = QuizService::new(questions.clone(), Clock::fixed(fixed_now()));

    for question in questions.iter() {
        let wrong = question
            .options()
            .iter()
            .find(|option| !question.is_correct(option))
            .cloned()
            .unwrap_or_else(|| question.correct_option().to_string());
        service.apply(QuizIntent::Select(wrong)).unwrap();

        let rejected = service.apply(QuizIntent::Select(question.correct_option().to_string()));
        assert!(matches!(
            rejected,
            Err(InvalidTransition::NotAwaitingAnswer { .. })
        ));

        service.apply(QuizIntent::Next).unwrap();
    }

    let completed = service.completed().expect("completed");
    assert_eq!(completed.outcome.total, total);
    assert_eq!(completed.outcome.score, 0);
    assert_eq!(completed.outcome.verdict().headline(), "Oops!");

    assert_eq!(
        service.apply(QuizIntent::Retry).unwrap(),
        IntentOutcome::Restarted
    );
    let state = service.state();
    assert_eq!(state.current_index, 0);
    assert_eq!(state.score, 0);
    assert_eq!(state.selected_option, None);
    assert_eq!(state.phase, QuizPhase::AwaitingAnswer);
}

#[test]
fn single_question_quiz_completes_on_first_advance() {
    let questions = QuestionSet::new(vec![abc_question("Only", "C")]).unwrap();
    let mut service = QuizService::new(questions, Clock::fixed(fixed_now()));

    service.submit_answer("C").unwrap();
    let advance = service.advance().unwrap();
    assert_eq!(
        advance,
        Advance::Completed(QuizOutcome { score: 1, total: 1 })
    );
    assert!(service.advance().is_err());
    assert_eq!(service.state().score, 1);
}
