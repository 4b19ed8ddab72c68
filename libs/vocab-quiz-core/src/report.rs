//! Results summary for a completed quiz.
//!
//! This is plain data for whatever renders the results screen or
//! certificate; nothing here formats a document.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::types::{QuestionType, Quiz, QuizQuestion, QuizType};

/// Grade band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    Satisfactory,
    NeedsImprovement,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 80.0 {
            Self::VeryGood
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Satisfactory
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Outcome of one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
    pub id: usize,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_answers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched_answers: Vec<String>,
    /// Every submission, in order.
    pub submitted: Vec<String>,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completeness: Option<u8>,
}

impl From<&QuizQuestion> for QuestionResult {
    fn from(question: &QuizQuestion) -> Self {
        let submitted = if question.user_answers.is_empty() {
            question.user_answer.iter().cloned().collect()
        } else {
            question.user_answers.clone()
        };

        Self {
            id: question.id,
            question_type: question.question_type,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            all_answers: question.all_answers.clone(),
            matched_answers: question.matched_answers.clone(),
            submitted,
            is_correct: question.is_correct,
            completeness: question.completeness,
        }
    }
}

/// Summary of a completed quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    pub quiz_id: String,
    pub title: String,
    pub quiz_type: QuizType,
    pub total_questions: usize,
    pub correct_count: usize,
    pub score: f64,
    pub grade: Grade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken_secs: Option<i64>,
    pub questions: Vec<QuestionResult>,
}

impl QuizReport {
    /// Summarize a quiz. Fails unless the quiz has been completed.
    pub fn from_quiz(quiz: &Quiz) -> Result<Self> {
        let score = match (quiz.is_complete, quiz.score) {
            (true, Some(score)) => score,
            _ => {
                return Err(QuizError::QuizNotComplete {
                    id: quiz.id.clone(),
                })
            }
        };

        Ok(Self {
            quiz_id: quiz.id.clone(),
            title: quiz.title.clone(),
            quiz_type: quiz.settings.quiz_type,
            total_questions: quiz.total_questions(),
            correct_count: quiz.correct_count(),
            score,
            grade: Grade::from_score(score),
            time_taken_secs: time_taken(quiz).map(|d| d.num_seconds()),
            questions: quiz.questions.iter().map(QuestionResult::from).collect(),
        })
    }

    /// Score rounded for display, e.g. `"67"`.
    pub fn score_display(&self) -> String {
        format!("{:.0}", self.score)
    }

    /// Time taken as `"<m>m <s>s"`, or `"0m 0s"` when unknown.
    pub fn time_taken_display(&self) -> String {
        format_duration(self.time_taken_secs.map(Duration::seconds))
    }
}

/// Elapsed time between start and end, if both are stamped.
pub fn time_taken(quiz: &Quiz) -> Option<Duration> {
    match (quiz.start_time, quiz.end_time) {
        (Some(start), Some(end)) => Some(end - start),
        _ => None,
    }
}

/// Format a duration as whole minutes and seconds.
pub fn format_duration(duration: Option<Duration>) -> String {
    let secs = duration.map(|d| d.num_seconds().max(0)).unwrap_or(0);
    format!("{}m {}s", secs / 60, secs % 60)
}
