//! Question pool construction.

use crate::normalize::has_content;
use crate::types::{QuizQuestion, QuizType, VocabularyEntry, VocabularyList};

/// Expand a vocabulary list into every candidate question for a quiz type.
///
/// Definition and mixed quizzes get one definition question per word.
/// Word and mixed quizzes get one word question per definition, all sharing
/// the word's `word_id`. Ids are positions in the returned pool.
pub fn build_pool(vocabulary: &VocabularyList, quiz_type: QuizType) -> Vec<QuizQuestion> {
    let mut pool = Vec::new();

    for (index, raw) in vocabulary.vocabulary.iter().enumerate() {
        let Some(entry) = clean_entry(raw) else {
            tracing::debug!(index, word = %raw.word, "skipping unusable vocabulary entry");
            continue;
        };

        if quiz_type.includes_definition_questions() {
            pool.push(QuizQuestion::definition(pool.len(), &entry));
        }

        if quiz_type.includes_word_questions() {
            for definition in &entry.definitions {
                pool.push(QuizQuestion::word(pool.len(), &entry, definition));
            }
        }
    }

    tracing::debug!(
        entries = vocabulary.len(),
        questions = pool.len(),
        quiz_type = %quiz_type,
        "built question pool"
    );

    pool
}

/// Number of questions a vocabulary can yield for a quiz type.
pub fn available_question_count(vocabulary: &VocabularyList, quiz_type: QuizType) -> usize {
    vocabulary
        .vocabulary
        .iter()
        .filter_map(clean_entry)
        .map(|entry| {
            let definition_questions = usize::from(quiz_type.includes_definition_questions());
            let word_questions = if quiz_type.includes_word_questions() {
                entry.definitions.len()
            } else {
                0
            };
            definition_questions + word_questions
        })
        .sum()
}

/// Trim the word and drop definitions with nothing to match against, or
/// `None` if nothing is left.
fn clean_entry(entry: &VocabularyEntry) -> Option<VocabularyEntry> {
    if !entry.is_usable() {
        return None;
    }
    let definitions = entry
        .definitions
        .iter()
        .map(|d| d.trim())
        .filter(|d| has_content(d))
        .map(str::to_string)
        .collect();
    Some(VocabularyEntry::new(entry.word.trim(), definitions))
}
