//! Output formatting module

use anyhow::Result;
use lexsieve_core::Verdict;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the classification of a single token
    fn format_token(&mut self, token: &str, verdict: &Verdict, admitted: bool) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Names of the predicates that hold, in a fixed order
pub fn verdict_labels(verdict: &Verdict) -> Vec<&'static str> {
    [
        (verdict.word, "word"),
        (verdict.profanity, "profanity"),
        (verdict.stopword, "stopword"),
        (verdict.duplicate, "duplicate"),
        (verdict.web, "web"),
        (verdict.uuid, "uuid"),
        (verdict.too_long, "too_long"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect()
}
