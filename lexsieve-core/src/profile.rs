//! Frozen per-language data

use crate::config::ClassifierConfig;
use crate::error::{Error, Result};
use crate::loader::load_list;
use std::collections::HashSet;

/// Per-language data that never changes after construction.
///
/// A profile is either fully loaded or not built at all: an unknown code or a
/// missing list aborts construction. Wrap it in an `Arc` to share it between
/// classifiers.
#[derive(Debug)]
pub struct LanguageProfile {
    code: String,
    max_word_length: usize,
    profanity: HashSet<String>,
    stopwords: HashSet<String>,
}

impl LanguageProfile {
    /// Load the profile for `code`.
    ///
    /// The code is checked against the max word length table before any file
    /// is touched.
    pub fn load(code: &str, config: &ClassifierConfig) -> Result<Self> {
        let max_word_length = config
            .max_word_length(code)
            .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))?;

        let profanity = load_list(&config.profanity_list_path(code))?;
        let stopwords = load_list(&config.stopwords_list_path(code))?;

        Ok(Self::from_parts(code, max_word_length, profanity, stopwords))
    }

    /// Assemble a profile from sets already in memory
    pub fn from_parts(
        code: impl Into<String>,
        max_word_length: usize,
        profanity: HashSet<String>,
        stopwords: HashSet<String>,
    ) -> Self {
        Self {
            code: code.into(),
            max_word_length,
            profanity,
            stopwords,
        }
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Longest accepted word, in characters
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Frozen profanity set
    pub fn profanity(&self) -> &HashSet<String> {
        &self.profanity
    }

    /// Frozen stopword set
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// Exact, case-sensitive profanity lookup
    #[inline]
    pub fn is_profanity(&self, token: &str) -> bool {
        self.profanity.contains(token)
    }

    /// Exact, case-sensitive stopword lookup
    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}
