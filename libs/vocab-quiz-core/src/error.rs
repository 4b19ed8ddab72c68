//! Error types for vocab-quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by quiz generation and the quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no vocabulary available to create a quiz")]
    EmptyVocabulary,

    #[error("no active quiz")]
    NoActiveQuiz,

    #[error("quiz {id} is already complete")]
    QuizAlreadyComplete { id: String },

    #[error("quiz {id} has not been completed")]
    QuizNotComplete { id: String },

    #[error("invalid quiz settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

/// Validation failures for quiz settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("question count must be at least 1")]
    QuestionCountTooLow,

    #[error("question count {requested} exceeds maximum of {max}")]
    QuestionCountTooHigh { requested: usize, max: usize },

    #[error("time limit of {minutes} minutes is out of range (1-60)")]
    TimeLimitOutOfRange { minutes: u32 },
}

/// Errors that can occur while parsing vocabulary input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid vocabulary json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line} is not a valid word, definition pair: \"{content}\"")]
    InvalidLine { line: usize, content: String },

    #[error("no vocabulary entries found")]
    EmptyInput,
}
