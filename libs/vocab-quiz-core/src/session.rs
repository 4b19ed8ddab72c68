//! Quiz session: owns the active quiz and every write to its state.
//!
//! A session moves through `InProgress` to `Complete`. Answers, navigation
//! and scoring all go through the session so that match state, correctness
//! and the score stay consistent. Callers only ever see `&Quiz`.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::error::{QuizError, Result};
use crate::matching::check_answer;
use crate::pool::build_pool;
use crate::selection::{select_questions, shuffle};
use crate::store::VocabularySource;
use crate::types::{Quiz, QuizQuestion, QuizSettings};

/// Drives a single active quiz built from a vocabulary source.
#[derive(Debug)]
pub struct QuizSession<S, R = StdRng> {
    source: S,
    rng: R,
    current: Option<Quiz>,
}

impl<S: VocabularySource> QuizSession<S, StdRng> {
    /// Create a session with an entropy-seeded random source.
    pub fn new(source: S) -> Self {
        Self::with_rng(source, StdRng::from_entropy())
    }
}

impl<S: VocabularySource, R: Rng> QuizSession<S, R> {
    /// Create a session with an explicit random source (seed it for tests).
    pub fn with_rng(source: S, rng: R) -> Self {
        Self {
            source,
            rng,
            current: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Build a new quiz from the current vocabulary, replacing any prior quiz.
    pub fn generate_quiz(&mut self, settings: QuizSettings) -> Result<&Quiz> {
        settings.validate()?;

        let vocabulary = self
            .source
            .vocabulary()
            .filter(|v| !v.is_empty())
            .ok_or(QuizError::EmptyVocabulary)?;

        let pool = build_pool(&vocabulary, settings.quiz_type);
        if pool.is_empty() {
            tracing::warn!(entries = vocabulary.len(), "vocabulary has no usable entries");
            return Err(QuizError::EmptyVocabulary);
        }
        let pool_size = pool.len();

        let mut questions = select_questions(
            pool,
            settings.question_count,
            settings.quiz_type,
            &mut self.rng,
        );
        if settings.randomize_order {
            shuffle(&mut questions, &mut self.rng);
        }
        for (position, question) in questions.iter_mut().enumerate() {
            question.id = position;
        }

        let quiz = Quiz {
            id: format!("quiz_{}", Uuid::new_v4().simple()),
            title: format!("Vocabulary Quiz ({})", settings.quiz_type),
            settings,
            questions,
            current_question_index: 0,
            start_time: Some(Utc::now()),
            end_time: None,
            score: None,
            is_complete: false,
        };

        tracing::info!(
            quiz_id = %quiz.id,
            quiz_type = %quiz.settings.quiz_type,
            pool = pool_size,
            questions = quiz.questions.len(),
            "generated quiz"
        );

        Ok(&*self.current.insert(quiz))
    }

    pub fn current_quiz(&self) -> Option<&Quiz> {
        self.current.as_ref()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current.as_ref().and_then(Quiz::current_question)
    }

    pub fn is_last_question(&self) -> bool {
        self.current.as_ref().is_some_and(Quiz::is_last_question)
    }

    /// Submit an answer for the current question.
    ///
    /// Multi-answer definition questions stay current so the user can add
    /// further synonyms; the caller decides when to advance. Returns whether
    /// this answer matched.
    pub fn submit_answer(&mut self, answer: &str) -> Result<bool> {
        let quiz = self.active_quiz_mut()?;
        if quiz.is_complete {
            tracing::warn!(quiz_id = %quiz.id, "answer submitted to completed quiz");
            return Err(QuizError::QuizAlreadyComplete {
                id: quiz.id.clone(),
            });
        }

        let question = &mut quiz.questions[quiz.current_question_index];
        let matched = if question.is_multi_answer() {
            question.user_answers.push(answer.to_string());
            question.user_answer = Some(answer.to_string());
            check_answer(question, answer)
        } else {
            question.user_answer = Some(answer.to_string());
            let matched = check_answer(question, answer);
            question.is_correct = matched;
            matched
        };

        tracing::debug!(
            quiz_id = %quiz.id,
            question_id = question.id,
            matched,
            is_correct = question.is_correct,
            "answer submitted"
        );

        Ok(matched)
    }

    /// Advance to the next question. Returns false at the last question,
    /// after completion, or with no active quiz.
    pub fn next_question(&mut self) -> bool {
        let Some(quiz) = self.current.as_mut() else {
            return false;
        };
        if quiz.is_complete || quiz.is_last_question() {
            return false;
        }
        quiz.current_question_index += 1;
        true
    }

    /// Finish the quiz and compute its score.
    ///
    /// Completing an already complete quiz returns it unchanged.
    pub fn complete_quiz(&mut self) -> Result<&Quiz> {
        let quiz = self.active_quiz_mut()?;
        if !quiz.is_complete {
            let total = quiz.total_questions();
            let correct = quiz.correct_count();
            let score = if total == 0 {
                0.0
            } else {
                100.0 * correct as f64 / total as f64
            };

            quiz.is_complete = true;
            quiz.end_time = Some(Utc::now());
            quiz.score = Some(score);

            tracing::info!(quiz_id = %quiz.id, correct, total, score, "quiz completed");
        }
        Ok(&*quiz)
    }

    /// Drop the current quiz, returning it if there was one.
    pub fn clear(&mut self) -> Option<Quiz> {
        self.current.take()
    }

    fn active_quiz_mut(&mut self) -> Result<&mut Quiz> {
        self.current.as_mut().ok_or_else(|| {
            tracing::warn!("operation requires an active quiz");
            QuizError::NoActiveQuiz
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::VocabularyStore;
    use crate::types::{QuestionType, QuizType, VocabularyEntry, VocabularyList};
    use pretty_assertions::assert_eq;

    fn fleet_vocabulary() -> VocabularyList {
        VocabularyList::new(vec![VocabularyEntry::new(
            "fleet",
            vec![
                "armada".to_string(),
                "group of ships".to_string(),
                "collection of naval vessels".to_string(),
            ],
        )])
    }

    fn session(vocab: VocabularyList) -> QuizSession<VocabularyList, StdRng> {
        QuizSession::with_rng(vocab, StdRng::seed_from_u64(17))
    }

    #[test]
    fn test_generate_definition_quiz() {
        let mut session = session(fleet_vocabulary());
        let quiz = session
            .generate_quiz(QuizSettings::new(QuizType::Definition, 5))
            .unwrap();
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.title, "Vocabulary Quiz (definition)");
        assert!(quiz.id.starts_with("quiz_"));
        assert!(quiz.start_time.is_some());
        assert_eq!(quiz.current_question_index, 0);
        assert!(!quiz.is_complete);
        assert_eq!(quiz.score, None);
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let mut session = session(VocabularyList::default());
        let result = session.generate_quiz(QuizSettings::new(QuizType::Mixed, 5));
        assert!(matches!(result, Err(QuizError::EmptyVocabulary)));
        assert!(session.current_quiz().is_none());
    }

    #[test]
    fn test_unusable_vocabulary_rejected() {
        let vocab = VocabularyList::new(vec![VocabularyEntry::new("fleet", vec![])]);
        let mut session = session(vocab);
        let result = session.generate_quiz(QuizSettings::new(QuizType::Mixed, 5));
        assert!(matches!(result, Err(QuizError::EmptyVocabulary)));
    }

    #[test]
    fn test_missing_vocabulary_rejected() {
        let mut session = QuizSession::with_rng(VocabularyStore::new(), StdRng::seed_from_u64(1));
        let result = session.generate_quiz(QuizSettings::new(QuizType::Word, 1));
        assert!(matches!(result, Err(QuizError::EmptyVocabulary)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut session = session(fleet_vocabulary());
        let result = session.generate_quiz(QuizSettings::new(QuizType::Word, 0));
        assert!(matches!(result, Err(QuizError::InvalidSettings(_))));
    }

    #[test]
    fn test_submit_without_quiz() {
        let mut session = session(fleet_vocabulary());
        assert!(matches!(
            session.submit_answer("armada"),
            Err(QuizError::NoActiveQuiz)
        ));
        assert!(matches!(session.complete_quiz(), Err(QuizError::NoActiveQuiz)));
        assert!(!session.next_question());
    }

    #[test]
    fn test_multi_answer_submissions_accumulate() {
        let mut session = session(fleet_vocabulary());
        session
            .generate_quiz(QuizSettings::new(QuizType::Definition, 1))
            .unwrap();

        assert!(session.submit_answer("group of ships").unwrap());
        assert!(session.submit_answer("armada").unwrap());
        assert!(!session.submit_answer("submarine").unwrap());

        let question = session.current_question().unwrap();
        assert_eq!(question.user_answers.len(), 3);
        assert_eq!(question.user_answer.as_deref(), Some("submarine"));
        assert_eq!(question.matched_answers.len(), 2);
        assert_eq!(question.completeness, Some(67));
        assert!(question.is_correct);
        assert_eq!(session.current_quiz().unwrap().current_question_index, 0);
    }

    #[test]
    fn test_single_answer_overwrites_correctness() {
        let mut session = session(fleet_vocabulary());
        let mut settings = QuizSettings::new(QuizType::Word, 3);
        settings.randomize_order = false;
        session.generate_quiz(settings).unwrap();

        assert!(session.submit_answer("fleet").unwrap());
        assert!(session.current_question().unwrap().is_correct);
        assert!(!session.submit_answer("navy").unwrap());
        let question = session.current_question().unwrap();
        assert!(!question.is_correct);
        assert!(question.user_answers.is_empty());
        assert_eq!(question.question_type, QuestionType::Word);
    }

    #[test]
    fn test_navigation_and_completion() {
        let mut session = session(fleet_vocabulary());
        session
            .generate_quiz(QuizSettings::new(QuizType::Word, 3))
            .unwrap();

        session.submit_answer("fleet").unwrap();
        assert!(session.next_question());
        session.submit_answer("wrong").unwrap();
        assert!(session.next_question());
        assert!(session.is_last_question());
        assert!(!session.next_question());

        let quiz = session.complete_quiz().unwrap();
        assert!(quiz.is_complete);
        assert!(quiz.end_time.is_some());
        assert_eq!(quiz.score, Some(100.0 / 3.0));
    }

    #[test]
    fn test_completed_quiz_is_read_only() {
        let mut session = session(fleet_vocabulary());
        session
            .generate_quiz(QuizSettings::new(QuizType::Word, 3))
            .unwrap();
        session.complete_quiz().unwrap();

        assert!(matches!(
            session.submit_answer("fleet"),
            Err(QuizError::QuizAlreadyComplete { .. })
        ));
        assert!(!session.next_question());

        let end_time = session.current_quiz().unwrap().end_time;
        let quiz = session.complete_quiz().unwrap();
        assert!(quiz.is_complete);
        assert_eq!(quiz.end_time, end_time);
        assert_eq!(quiz.score, Some(0.0));
    }

    #[test]
    fn test_new_quiz_replaces_previous() {
        let mut session = session(fleet_vocabulary());
        let first = session
            .generate_quiz(QuizSettings::new(QuizType::Word, 3))
            .unwrap()
            .id
            .clone();
        session.submit_answer("fleet").unwrap();
        let second = session
            .generate_quiz(QuizSettings::new(QuizType::Word, 3))
            .unwrap();
        assert_ne!(second.id, first);
        assert!(second.questions.iter().all(|q| q.user_answer.is_none()));
    }

    #[test]
    fn test_ids_follow_final_order() {
        let mut session = session(fleet_vocabulary());
        let quiz = session
            .generate_quiz(QuizSettings::new(QuizType::Mixed, 4))
            .unwrap();
        let ids: Vec<usize> = quiz.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_clear_drops_quiz() {
        let mut session = session(fleet_vocabulary());
        session
            .generate_quiz(QuizSettings::new(QuizType::Word, 1))
            .unwrap();
        assert!(session.clear().is_some());
        assert!(session.current_quiz().is_none());
        assert!(!session.is_last_question());
    }
}
