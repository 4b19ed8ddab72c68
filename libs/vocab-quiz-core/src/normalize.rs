//! Text normalization for answer comparison.
//!
//! Two phrases are equivalent when their normalized forms are identical.
//! There is no stemming and no edit distance: normalization only removes
//! case, spacing, punctuation and articles.

/// Articles removed during normalization.
const ARTICLES: &[&str] = &["a", "an", "the"];

fn is_stripped_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '/'
            | '#'
            | '!'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | ';'
            | ':'
            | '{'
            | '}'
            | '='
            | '-'
            | '_'
            | '`'
            | '~'
            | '('
            | ')'
    )
}

fn is_article(word: &str) -> bool {
    ARTICLES.contains(&word)
}

/// Normalize text for comparison.
///
/// - lower-cases and collapses whitespace
/// - strips the punctuation set `. , / # ! $ % ^ & * ; : { } = - _ ` ~ ( )`
/// - drops a leading article and any article between two other words
///
/// A lone article (`"the"`) and a trailing article are kept so that the
/// result never becomes empty for non-empty input made of words.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped: String = collapsed
        .chars()
        .filter(|c| !is_stripped_punctuation(*c))
        .collect();

    // Punctuation removal can leave gaps ("ships - boats"), so re-tokenize.
    let mut words: Vec<&str> = stripped.split_whitespace().collect();

    if words.len() > 1 && is_article(words[0]) {
        words.remove(0);
    }

    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .filter(|(idx, word)| *idx == 0 || *idx == last || !is_article(word))
        .map(|(_, word)| *word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether text still has something to compare once normalized.
///
/// Blank and punctuation-only text (`"..."`, a stray `"-"`) has none.
pub fn has_content(text: &str) -> bool {
    !normalize(text).is_empty()
}

/// Whether two texts are equivalent after normalization.
///
/// Text that normalizes to nothing never matches, not even itself.
pub fn texts_match(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    !a.is_empty() && a == b
}
