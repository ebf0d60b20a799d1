//! Line-oriented terminal front end for the quiz.
//!
//! Reads one command per line: an option number or its exact text while a
//! question is open, Enter to continue after an answer, `r` to retry once the
//! quiz is over, and `q` to quit at any time.

use std::io::{self, BufRead, Write};

use quiz_core::model::QuizOutcome;
use quiz_core::{QuizPhase, QuizSnapshot};
use services::{IntentOutcome, QuizIntent, QuizService};

/// Run the quiz under a `title` banner until the user quits or input ends.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn run_text_session<R: BufRead, W: Write>(
    service: &mut QuizService,
    title: &str,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{title}")?;
    render(&service.state(), &mut output)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();
        if command.eq_ignore_ascii_case("q") {
            break;
        }

        let state = service.state();
        let Some(intent) = parse_intent(&state, command) else {
            writeln!(output, "{}", hint_for(state.phase))?;
            continue;
        };

        match service.apply(intent) {
            Ok(IntentOutcome::Answered(feedback)) => {
                if feedback.is_correct {
                    writeln!(output, "Correct!")?;
                } else {
                    writeln!(output, "Wrong. The answer was: {}", feedback.correct_option)?;
                }
                writeln!(output, "Press Enter for the next question.")?;
            }
            Ok(IntentOutcome::Advanced(_) | IntentOutcome::Restarted) => {
                render(&service.state(), &mut output)?;
            }
            Err(err) => writeln!(output, "{err}")?,
        }
        output.flush()?;
    }

    output.flush()
}

fn parse_intent(state: &QuizSnapshot, command: &str) -> Option<QuizIntent> {
    match state.phase {
        QuizPhase::AwaitingAnswer => {
            // An exact label wins over a position, so "4" can pick the option "4".
            let by_text = state.options.iter().find(|option| option.as_str() == command);
            let by_number = || {
                let number = command.parse::<usize>().ok()?;
                state.options.get(number.checked_sub(1)?)
            };
            by_text
                .or_else(by_number)
                .map(|option| QuizIntent::Select(option.clone()))
        }
        QuizPhase::AnswerRevealed => command.is_empty().then_some(QuizIntent::Next),
        QuizPhase::Complete => command
            .eq_ignore_ascii_case("r")
            .then_some(QuizIntent::Retry),
    }
}

fn hint_for(phase: QuizPhase) -> &'static str {
    match phase {
        QuizPhase::AwaitingAnswer => "Pick an option by number or text, or q to quit.",
        QuizPhase::AnswerRevealed => "Press Enter to continue, or q to quit.",
        QuizPhase::Complete => "Type r to retry, or q to quit.",
    }
}

fn render<W: Write>(state: &QuizSnapshot, output: &mut W) -> io::Result<()> {
    if state.is_complete {
        let outcome = QuizOutcome {
            score: state.score,
            total: state.total,
        };
        writeln!(output)?;
        writeln!(output, "{}", outcome.verdict().headline())?;
        writeln!(output, "Score: {} / {}", state.score, state.total)?;
        writeln!(output, "{}", hint_for(QuizPhase::Complete))?;
        return output.flush();
    }

    writeln!(output)?;
    writeln!(output, "Question {} / {}", state.current_index + 1, state.total)?;
    writeln!(output, "{}", state.question)?;
    for (number, option) in state.options.iter().enumerate() {
        writeln!(output, "  {}. {option}", number + 1)?;
    }
    output.flush()
}
