//! Core types for the vocabulary quiz engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SettingsError;
use crate::normalize::has_content;

/// Absolute upper bound on questions in a single quiz.
pub const MAX_QUESTION_COUNT: usize = 50;

/// Accepted range for the advisory time limit, in minutes.
pub const TIME_LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// One word with its accepted definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub definitions: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>, definitions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            definitions,
        }
    }

    /// Whether this entry can produce questions.
    ///
    /// Extraction output is often partial, so entries without a word or
    /// without a matchable definition are skipped rather than rejected.
    pub fn is_usable(&self) -> bool {
        !self.word.trim().is_empty() && self.definitions.iter().any(|d| has_content(d))
    }
}

/// Structured vocabulary as produced by the extraction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyList {
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

impl VocabularyList {
    pub fn new(vocabulary: Vec<VocabularyEntry>) -> Self {
        Self { vocabulary }
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of entries that will contribute questions.
    pub fn usable_count(&self) -> usize {
        self.vocabulary.iter().filter(|e| e.is_usable()).count()
    }
}

/// Which direction(s) a quiz asks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    /// Prompt with a definition, expect the word.
    Word,
    /// Prompt with the word, expect its definitions.
    Definition,
    Mixed,
}

impl Default for QuizType {
    fn default() -> Self {
        Self::Mixed
    }
}

impl QuizType {
    /// Get the quiz type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Definition => "definition",
            Self::Mixed => "mixed",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "word" => Some(Self::Word),
            "definition" => Some(Self::Definition),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn includes_word_questions(self) -> bool {
        matches!(self, Self::Word | Self::Mixed)
    }

    pub fn includes_definition_questions(self) -> bool {
        matches!(self, Self::Definition | Self::Mixed)
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Word,
    Definition,
}

/// Host-level defaults for new quizzes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDefaults {
    pub quiz_type: QuizType,
    pub question_count: usize,
    pub randomize_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl Default for QuizDefaults {
    fn default() -> Self {
        Self {
            quiz_type: QuizType::default(),
            question_count: 10,
            randomize_order: true,
            time_limit: None,
        }
    }
}

/// User choices for a quiz (all fields optional for overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<QuizType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomize_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

/// Settings for one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub quiz_type: QuizType,
    pub question_count: usize,
    pub randomize_order: bool,
    /// Minutes. Advisory only; the engine never enforces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::merge(&QuizDefaults::default(), None)
    }
}

impl QuizSettings {
    pub fn new(quiz_type: QuizType, question_count: usize) -> Self {
        Self {
            quiz_type,
            question_count,
            ..Self::default()
        }
    }

    /// Merge host defaults with optional user overrides.
    pub fn merge(defaults: &QuizDefaults, overrides: Option<&SettingsOverrides>) -> Self {
        match overrides {
            Some(o) => Self {
                quiz_type: o.quiz_type.unwrap_or(defaults.quiz_type),
                question_count: o.question_count.unwrap_or(defaults.question_count),
                randomize_order: o.randomize_order.unwrap_or(defaults.randomize_order),
                time_limit: o.time_limit.or(defaults.time_limit),
            },
            None => Self {
                quiz_type: defaults.quiz_type,
                question_count: defaults.question_count,
                randomize_order: defaults.randomize_order,
                time_limit: defaults.time_limit,
            },
        }
    }

    /// Check the bounds that hold regardless of vocabulary.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.validate_with_max(MAX_QUESTION_COUNT)
    }

    /// Check bounds against the number of questions actually available.
    pub fn validate_for_available(&self, available: usize) -> Result<(), SettingsError> {
        self.validate_with_max(max_question_count(available))
    }

    fn validate_with_max(&self, max: usize) -> Result<(), SettingsError> {
        if self.question_count == 0 {
            return Err(SettingsError::QuestionCountTooLow);
        }
        if self.question_count > max {
            return Err(SettingsError::QuestionCountTooHigh {
                requested: self.question_count,
                max,
            });
        }
        if let Some(minutes) = self.time_limit {
            if !TIME_LIMIT_RANGE.contains(&minutes) {
                return Err(SettingsError::TimeLimitOutOfRange { minutes });
            }
        }
        Ok(())
    }

    /// Clamp the question count into `1..=max_question_count(available)`.
    pub fn clamped_to(mut self, available: usize) -> Self {
        self.question_count = self.question_count.clamp(1, max_question_count(available).max(1));
        self
    }
}

/// Largest question count a user may request given `available` questions.
pub fn max_question_count(available: usize) -> usize {
    available.min(MAX_QUESTION_COUNT)
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: usize,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt: String,
    /// Primary answer: the word, or the first definition.
    pub answer: String,
    /// Every acceptable definition (definition questions only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_answers: Vec<String>,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completeness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_id: Option<String>,
}

impl QuizQuestion {
    /// Question whose prompt is the word and whose answers are its definitions.
    pub fn definition(id: usize, entry: &VocabularyEntry) -> Self {
        Self {
            id,
            question_type: QuestionType::Definition,
            prompt: entry.word.clone(),
            answer: entry.definitions.first().cloned().unwrap_or_default(),
            all_answers: entry.definitions.clone(),
            matched_answers: Vec::new(),
            user_answer: None,
            user_answers: Vec::new(),
            is_correct: false,
            completeness: None,
            word_id: Some(entry.word.clone()),
        }
    }

    /// Question whose prompt is one definition and whose answer is the word.
    pub fn word(id: usize, entry: &VocabularyEntry, definition: &str) -> Self {
        Self {
            id,
            question_type: QuestionType::Word,
            prompt: definition.to_string(),
            answer: entry.word.clone(),
            all_answers: Vec::new(),
            matched_answers: Vec::new(),
            user_answer: None,
            user_answers: Vec::new(),
            is_correct: false,
            completeness: None,
            word_id: Some(entry.word.clone()),
        }
    }

    /// Key used to group questions for fair distribution.
    pub fn group_key(&self) -> &str {
        self.word_id.as_deref().unwrap_or(&self.answer)
    }

    /// Definition question that accepts several synonyms.
    pub fn is_multi_answer(&self) -> bool {
        self.question_type == QuestionType::Definition && !self.all_answers.is_empty()
    }

    /// Whether the user has submitted anything for this question.
    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }
}

/// A generated quiz and its progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub settings: QuizSettings,
    pub questions: Vec<QuizQuestion>,
    pub current_question_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Percentage of correct questions, set on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub is_complete: bool,
}

impl Quiz {
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct).count()
    }
}
