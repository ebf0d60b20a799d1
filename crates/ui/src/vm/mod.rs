mod quiz_vm;

pub use quiz_vm::{OptionFeedback, OptionVm, QuizVm, ScoreModalVm, map_quiz_vm};
