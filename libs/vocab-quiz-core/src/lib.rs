//! Vocabulary quiz engine.
//!
//! Provides:
//! - Vocabulary parsing (extraction JSON and two-column text)
//! - Question pool building and fair, coverage-first selection
//! - Free-text answer matching with multi-synonym extraction
//! - Quiz session state (submit, advance, complete, score)
//! - Results summary for export

pub mod error;
pub mod matching;
pub mod normalize;
pub mod parser;
pub mod pool;
pub mod report;
pub mod selection;
pub mod session;
pub mod store;
pub mod types;

pub use error::{ParseError, QuizError, Result, SettingsError};
pub use matching::{check_answer, extract_phrases, find_matching_definition};
pub use normalize::{has_content, normalize, texts_match};
pub use parser::{parse, parse_json, parse_two_column, validate_two_column, ValidationReport};
pub use pool::{available_question_count, build_pool};
pub use report::{format_duration, Grade, QuestionResult, QuizReport};
pub use selection::{select_distributed, select_questions, shuffle};
pub use session::QuizSession;
pub use store::{SubscriptionId, VocabularySource, VocabularyStore};
pub use types::{
    max_question_count, QuestionType, Quiz, QuizDefaults, QuizQuestion, QuizSettings, QuizType,
    SettingsOverrides, VocabularyEntry, VocabularyList, MAX_QUESTION_COUNT,
};
