//! Test fixtures and factory functions for vocabulary data.

use vocab_quiz_core::{VocabularyEntry, VocabularyList};

/// Build an entry from string slices.
pub fn entry(word: &str, definitions: &[&str]) -> VocabularyEntry {
    VocabularyEntry::new(word, definitions.iter().map(|d| d.to_string()).collect())
}

/// The single-word vocabulary used by the matching scenarios.
pub fn fleet() -> VocabularyList {
    VocabularyList::new(vec![entry(
        "fleet",
        &["armada", "group of ships", "collection of naval vessels"],
    )])
}

/// Eight words with uneven definition counts (1, 2 or 3 each).
pub fn eight_words() -> VocabularyList {
    VocabularyList::new(vec![
        entry("fleet", &["armada", "group of ships", "collection of naval vessels"]),
        entry("ambiguous", &["unclear", "open to multiple interpretations"]),
        entry("brook", &["stream", "tolerate"]),
        entry("candid", &["frank"]),
        entry("diligent", &["hardworking", "careful", "persistent"]),
        entry("ephemeral", &["fleeting"]),
        entry("frugal", &["thrifty", "economical"]),
        entry("gregarious", &["sociable"]),
    ])
}

/// Extraction output as JSON, including entries the engine must skip.
pub fn extraction_json() -> &'static str {
    r#"{
        "vocabulary": [
            {"word": "fleet", "definitions": ["armada", "group of ships"]},
            {"word": "", "definitions": ["orphaned definition"]},
            {"word": "candid", "definitions": []},
            {"word": "brook", "definitions": ["stream", "tolerate"]}
        ]
    }"#
}
