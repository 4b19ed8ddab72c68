//! Question selection with fair word distribution.
//!
//! Words with many definitions produce many word questions. Plain uniform
//! sampling would over-represent them, so selection first takes one question
//! per distinct word (in random word order) and only then tops up at random
//! from whatever is left.

use crate::types::{QuestionType, QuizQuestion, QuizType};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Shuffle a slice in place (Fisher-Yates) using the given random source.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Pick `count` questions from a pool according to the quiz type.
///
/// When `count` covers the whole pool it is returned unchanged. Mixed
/// quizzes split the count into `count / 2` word questions and the rest
/// definition questions, each selected independently.
pub fn select_questions<R: Rng + ?Sized>(
    pool: Vec<QuizQuestion>,
    count: usize,
    quiz_type: QuizType,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    if count >= pool.len() {
        return pool;
    }

    match quiz_type {
        QuizType::Mixed => {
            let (word_questions, definition_questions): (Vec<_>, Vec<_>) = pool
                .into_iter()
                .partition(|q| q.question_type == QuestionType::Word);

            let word_count = count / 2;
            let definition_count = count - word_count;

            let mut selected = select_distributed(word_questions, word_count, rng);
            selected.extend(select_distributed(definition_questions, definition_count, rng));
            selected
        }
        QuizType::Word | QuizType::Definition => select_distributed(pool, count, rng),
    }
}

/// Select up to `count` questions, covering as many distinct words as possible.
///
/// Questions are grouped by [`QuizQuestion::group_key`]. Every group
/// contributes one randomly chosen question, in shuffled group order, before
/// any group contributes a second. Remaining slots are filled from a shuffled
/// pool of all unselected questions.
pub fn select_distributed<R: Rng + ?Sized>(
    questions: Vec<QuizQuestion>,
    count: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    if count == 0 {
        return Vec::new();
    }

    let mut groups: Vec<Vec<QuizQuestion>> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    for question in questions {
        let key = question.group_key().to_string();
        let index = *group_index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[index].push(question);
    }

    let mut order: Vec<usize> = (0..groups.len()).collect();
    shuffle(&mut order, rng);

    let mut selected = Vec::with_capacity(count);
    for &group in order.iter().take(count) {
        let candidates = &mut groups[group];
        let pick = rng.gen_range(0..candidates.len());
        selected.push(candidates.swap_remove(pick));
    }

    if selected.len() < count {
        let mut remaining: Vec<QuizQuestion> = order
            .iter()
            .flat_map(|&group| std::mem::take(&mut groups[group]))
            .collect();
        shuffle(&mut remaining, rng);

        while selected.len() < count {
            match remaining.pop() {
                Some(question) => selected.push(question),
                None => break,
            }
        }
    }

    tracing::debug!(
        groups = groups.len(),
        requested = count,
        selected = selected.len(),
        "selected distributed questions"
    );

    selected
}
