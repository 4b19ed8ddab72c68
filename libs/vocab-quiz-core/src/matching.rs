//! Answer matching for typed quiz answers.
//!
//! Definition questions accept several synonyms, and a user may type more
//! than one of them in a single answer ("brook jump into action"). The
//! matcher decomposes free text into candidate phrases and credits the most
//! specific one that names an accepted definition.

use crate::normalize::{normalize, texts_match};
use crate::types::QuizQuestion;
use std::collections::HashSet;

/// Candidate phrases shorter than this are never matched.
const MIN_PHRASE_CHARS: usize = 2;

/// Generate candidate phrases from a free-text answer.
///
/// Returns the full phrase, every word longer than one character, and every
/// contiguous run of two or more words, deduplicated in first-seen order.
/// The result deliberately over-generates; callers decide which candidates
/// are plausible and in what order to try them.
pub fn extract_phrases(input: &str) -> Vec<String> {
    if normalize(input).is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    if words.len() == 1 {
        return vec![words[0].to_string()];
    }

    let mut seen = HashSet::new();
    let mut phrases = Vec::new();
    let mut push = |phrase: String| {
        if seen.insert(phrase.clone()) {
            phrases.push(phrase);
        }
    };

    push(words.join(" "));

    for word in &words {
        if word.chars().count() > 1 {
            push(word.to_string());
        }
    }

    for start in 0..words.len() {
        for end in start + 2..=words.len() {
            push(words[start..end].join(" "));
        }
    }

    phrases
}

/// Find the accepted definition named by a user answer.
///
/// A direct match of the whole answer wins. Otherwise candidate phrases are
/// tried longest first, so a short word cannot claim a match that belongs to
/// a longer, more specific phrase.
pub fn find_matching_definition<'a>(definitions: &'a [String], user_answer: &str) -> Option<&'a str> {
    if let Some(direct) = definitions.iter().find(|d| texts_match(d, user_answer)) {
        return Some(direct.as_str());
    }

    let mut phrases = extract_phrases(user_answer);
    phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    phrases
        .iter()
        .filter(|phrase| phrase.chars().count() >= MIN_PHRASE_CHARS)
        .find_map(|phrase| definitions.iter().find(|d| texts_match(d, phrase)))
        .map(String::as_str)
}

/// Check a user answer against a question, updating its match state.
///
/// For definition questions with accepted answers this records a newly
/// matched definition, recomputes completeness and keeps `is_correct` true
/// once anything has matched. Returns whether this submission matched.
///
/// Word questions get a single normalized comparison against the answer and
/// their state is left untouched.
pub fn check_answer(question: &mut QuizQuestion, user_answer: &str) -> bool {
    if !question.is_multi_answer() {
        let matched = texts_match(&question.answer, user_answer);
        tracing::debug!(question_id = question.id, matched, "checked single answer");
        return matched;
    }

    let matched = find_matching_definition(&question.all_answers, user_answer).map(str::to_string);

    if let Some(definition) = &matched {
        let already_matched = question
            .matched_answers
            .iter()
            .any(|existing| texts_match(existing, definition));
        if !already_matched {
            question.matched_answers.push(definition.clone());
        }
    }

    question.completeness = Some(completeness(
        question.matched_answers.len(),
        question.all_answers.len(),
    ));
    question.is_correct = !question.matched_answers.is_empty();

    tracing::debug!(
        question_id = question.id,
        matched = matched.is_some(),
        matched_count = question.matched_answers.len(),
        total = question.all_answers.len(),
        "checked definition answer"
    );

    matched.is_some()
}

/// Percentage of accepted answers matched, rounded to the nearest integer.
fn completeness(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * matched as f64 / total as f64).round() as u8
}
