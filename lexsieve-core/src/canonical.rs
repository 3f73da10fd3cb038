//! Canonical forms used as deduplication keys

use crate::config::PunctuationSets;

/// Compute the canonical form of a token.
///
/// Steps, in order: lower-case every character, remove every `strip`
/// character, then drop the first character if it is an `edge` character and
/// the last character if it is an `edge` character. The result may be empty.
pub fn canonical_form(token: &str, punctuation: &PunctuationSets) -> String {
    let mut canonical: String = token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&ch| !punctuation.strips(ch))
        .collect();

    if canonical.is_empty() {
        return canonical;
    }

    if canonical.starts_with(|ch: char| punctuation.is_edge(ch)) {
        canonical.remove(0);
    }
    if canonical.ends_with(|ch: char| punctuation.is_edge(ch)) {
        canonical.pop();
    }

    canonical
}
