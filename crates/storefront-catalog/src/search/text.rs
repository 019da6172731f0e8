//! Text normalization and keyword matching.

use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose, strip combining diacritics, trim.
///
/// The searched text and the query both go through this, so matching is
/// case- and accent-insensitive. Idempotent: normalizing an already
/// normalized string is a no-op.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

// U+0300..=U+036F covers the marks NFD produces for accented Latin text.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Multi-keyword AND match.
///
/// The query is split on whitespace into keywords; every keyword must appear
/// as a substring of the normalized text, in any order. A query with no
/// keywords matches nothing.
pub fn matches(text: &str, query: &str) -> bool {
    let query = normalize(query);
    let keywords: Vec<&str> = query.split_whitespace().collect();
    if keywords.is_empty() {
        return false;
    }

    let haystack = normalize(text);
    keywords.iter().all(|keyword| haystack.contains(keyword))
}
