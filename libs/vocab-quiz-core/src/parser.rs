//! Parsers for vocabulary extracted from a photographed sheet.
//!
//! # Formats
//! JSON, as returned by the extraction service:
//! ```json
//! {"vocabulary": [{"word": "fleet", "definitions": ["armada", "group of ships"]}]}
//! ```
//! A bare array of entries is accepted too.
//!
//! Two-column text, one `word, definition` pair per line (comma or tab):
//! ```text
//! fleet, armada
//! fleet	group of ships
//! ambiguous, unclear
//! ```
//! Repeated words collect their definitions into a single entry.

use crate::error::ParseError;
use crate::types::{VocabularyEntry, VocabularyList};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parse vocabulary, detecting JSON or two-column text.
pub fn parse(content: &str) -> Result<VocabularyList, ParseError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        parse_json(content)
    } else {
        parse_two_column(content)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonVocabulary {
    Wrapped(VocabularyList),
    Bare(Vec<VocabularyEntry>),
}

/// Parse the extraction service's JSON payload.
///
/// Blank content is `EmptyInput`; an empty `vocabulary` array is not.
pub fn parse_json(content: &str) -> Result<VocabularyList, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let list = match serde_json::from_str::<JsonVocabulary>(content) {
        Ok(JsonVocabulary::Wrapped(list)) => list,
        Ok(JsonVocabulary::Bare(entries)) => VocabularyList::new(entries),
        // Untagged errors are vague; re-parse as the wrapped form for a useful message.
        Err(_) => serde_json::from_str::<VocabularyList>(content)?,
    };

    tracing::debug!(
        entries = list.len(),
        usable = list.usable_count(),
        "parsed json vocabulary"
    );
    Ok(list)
}

/// Parse two-column `word, definition` text, stopping at the first bad line.
///
/// Text with no non-blank lines is `EmptyInput`.
pub fn parse_two_column(content: &str) -> Result<VocabularyList, ParseError> {
    let mut builder = ListBuilder::default();

    for (idx, line) in content.lines().enumerate() {
        match parse_line(line) {
            LineType::Empty => {}
            LineType::Pair(word, definition) => builder.add(word, definition),
            LineType::Invalid => {
                return Err(ParseError::InvalidLine {
                    line: idx + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    if builder.entries.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(builder.finish())
}

/// Outcome of checking two-column text without building a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub valid_rows: usize,
    pub errors: Vec<String>,
}

/// Check every line of two-column text and report all problems at once.
pub fn validate_two_column(content: &str) -> ValidationReport {
    let mut errors = Vec::new();
    let mut valid_rows = 0;
    let mut seen_rows = 0;

    for (idx, line) in content.lines().enumerate() {
        match parse_line(line) {
            LineType::Empty => continue,
            LineType::Pair(..) => valid_rows += 1,
            LineType::Invalid => errors.push(
                ParseError::InvalidLine {
                    line: idx + 1,
                    content: line.to_string(),
                }
                .to_string(),
            ),
        }
        seen_rows += 1;
    }

    if seen_rows == 0 {
        errors.push(ParseError::EmptyInput.to_string());
    } else if valid_rows == 0 {
        errors.push("no valid word, definition pairs found".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        valid_rows,
        errors,
    }
}

enum LineType<'a> {
    Pair(&'a str, &'a str),
    Invalid,
    Empty,
}

fn parse_line(line: &str) -> LineType<'_> {
    if line.trim().is_empty() {
        return LineType::Empty;
    }

    let parts: Vec<&str> = line.split(|c: char| c == ',' || c == '\t').map(str::trim).collect();
    match parts.as_slice() {
        &[word, definition] if !word.is_empty() && !definition.is_empty() => {
            LineType::Pair(word, definition)
        }
        _ => LineType::Invalid,
    }
}

/// Accumulates pairs into entries, keeping first-seen word order.
#[derive(Default)]
struct ListBuilder {
    entries: Vec<VocabularyEntry>,
    index: HashMap<String, usize>,
}

impl ListBuilder {
    fn add(&mut self, word: &str, definition: &str) {
        let entries = &mut self.entries;
        let idx = *self.index.entry(word.to_lowercase()).or_insert_with(|| {
            entries.push(VocabularyEntry::new(word, Vec::new()));
            entries.len() - 1
        });

        let definitions = &mut entries[idx].definitions;
        if !definitions.iter().any(|d| d == definition) {
            definitions.push(definition.to_string());
        }
    }

    fn finish(self) -> VocabularyList {
        VocabularyList::new(self.entries)
    }
}
