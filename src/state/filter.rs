//! Entry filtering (pure).

use crate::model::Entry;

/// Whether `query` filters anything at all.
///
/// Empty and whitespace-only queries let every entry through.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive equality of two characters.
///
/// Characters are mapped one at a time, never as part of a word, so context
/// rules such as the final sigma cannot make a substring stop matching.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b
        || a.to_uppercase().eq(b.to_uppercase())
        || a.to_lowercase().eq(b.to_lowercase())
}

/// Whether `haystack` contains `needle`, comparing character by character
/// with [`chars_eq_ignore_case`].
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<char> = haystack.chars().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

/// Visible subsequence of `entries` under `query`.
///
/// Blank queries return every entry. Otherwise entries containing `query`
/// case-insensitively are kept in their original order, without
/// deduplication. A non-blank query is matched as typed; surrounding
/// whitespace is part of the needle.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    if is_blank(query) {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| contains_ignore_case(entry.as_str(), query))
        .collect()
}

/// Whether any entry survives `query`. Short-circuits on the first hit.
pub fn has_match(entries: &[Entry], query: &str) -> bool {
    if is_blank(query) {
        return !entries.is_empty();
    }

    entries
        .iter()
        .any(|entry| contains_ignore_case(entry.as_str(), query))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
