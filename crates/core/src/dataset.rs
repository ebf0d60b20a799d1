//! Question list bundled with the app.

use thiserror::Error;

use crate::model::{Question, QuestionError, QuestionSet, QuestionSetError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error(transparent)]
    Set(#[from] QuestionSetError),
}

struct RawQuestion {
    text: &'static str,
    options: &'static [&'static str],
    answer: &'static str,
}

const BUILTIN: &[RawQuestion] = &[
    RawQuestion {
        text: "What's the biggest planet in our solar system?",
        options: &["Jupiter", "Saturn", "Neptune", "Mercury"],
        answer: "Jupiter",
    },
    RawQuestion {
        text: "What attraction in India is one of the most famous in the world?",
        options: &["Chand Minar", "Taj Mahal", "Stadium"],
        answer: "Taj Mahal",
    },
    RawQuestion {
        text: "What land animal can open its mouth the widest?",
        options: &["Alligator", "Crocodile", "Baboon", "Hippo"],
        answer: "Hippo",
    },
    RawQuestion {
        text: "What is the largest animal on Earth?",
        options: &["The African elephant", "The blue whale", "The sperm whale", "The giant squid"],
        answer: "The blue whale",
    },
    RawQuestion {
        text: "What is the only flying mammal?",
        options: &["The bat", "The flying squirrel", "The bald eagle", "The colugo"],
        answer: "The bat",
    },
];

/// Validates a static question table into a `QuestionSet`.
///
/// # Errors
///
/// Returns `DatasetError::Question` naming the first invalid entry, or
/// `DatasetError::Set` if the table is empty.
fn build(raw: &[RawQuestion]) -> Result<QuestionSet, DatasetError> {
    let questions = raw
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let options = entry.options.iter().map(ToString::to_string).collect();
            Question::new(entry.text, options, entry.answer)
                .map_err(|source| DatasetError::Question { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionSet::new(questions)?)
}

/// The built-in question list.
///
/// # Errors
///
/// Returns `DatasetError` if the bundled table fails validation.
pub fn builtin() -> Result<QuestionSet, DatasetError> {
    build(BUILTIN)
}
