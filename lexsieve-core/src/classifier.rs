//! Per-language token classifier
//!
//! A [`LanguageClassifier`] pairs a frozen [`LanguageProfile`] with a
//! dictionary that grows as the caller admits tokens. Predicates never mutate
//! anything; [`LanguageClassifier::add_word`] is the only write.
//!
//! # Example
//!
//! ```rust
//! use lexsieve_core::{LanguageClassifier, LanguageProfile, PunctuationSets, WordEntry};
//! use std::collections::HashSet;
//! use std::sync::Arc;
//!
//! let profile = LanguageProfile::from_parts("en", 30, HashSet::new(), HashSet::new());
//! let punctuation = PunctuationSets::from_strs(".!", "");
//! let mut classifier = LanguageClassifier::with_profile(Arc::new(profile), Arc::new(punctuation));
//!
//! assert!(!classifier.is_duplicate("cat"));
//! classifier.add_word(WordEntry::new("cat."));
//! assert!(classifier.is_duplicate("Cat!"));
//! ```

use crate::canonical::canonical_form;
use crate::config::{ClassifierConfig, PunctuationSets};
use crate::error::Result;
use crate::patterns;
use crate::profile::LanguageProfile;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// An admitted token, kept in admission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    /// The token as admitted
    pub word: String,
    /// Occurrence count carried for downstream consumers
    pub count: u64,
}

impl WordEntry {
    /// Entry with a count of one
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_count(word, 1)
    }

    /// Entry with an explicit count
    pub fn with_count(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Every predicate evaluated on one token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Contains at least one alphabetic character
    pub word: bool,
    /// Exact match in the profanity list
    pub profanity: bool,
    /// Exact match in the stopword list
    pub stopword: bool,
    /// Canonical form already admitted
    pub duplicate: bool,
    /// Matches the permissive URI grammar
    pub web: bool,
    /// Hyphenated UUID with a defined version
    pub uuid: bool,
    /// Longer than the language's max word length
    pub too_long: bool,
}

/// Classifier for one language.
///
/// Frozen data is held behind `Arc` and can be shared; the dictionary and word
/// log belong to this instance alone. Give each worker its own instance
/// (see [`LanguageClassifier::fork`]) rather than sharing one.
#[derive(Debug)]
pub struct LanguageClassifier {
    profile: Arc<LanguageProfile>,
    punctuation: Arc<PunctuationSets>,
    dictionary: HashSet<String>,
    words: Vec<WordEntry>,
}

impl LanguageClassifier {
    /// Load the profile for `code` and build an empty classifier
    pub fn new(code: &str, config: &ClassifierConfig) -> Result<Self> {
        let profile = LanguageProfile::load(code, config)?;
        log::info!(
            "Built classifier for '{}' ({} profanity entries, {} stopwords, max length {})",
            profile.code(),
            profile.profanity().len(),
            profile.stopwords().len(),
            profile.max_word_length()
        );
        Ok(Self::with_profile(
            Arc::new(profile),
            Arc::clone(config.punctuation()),
        ))
    }

    /// Build an empty classifier over an already loaded profile
    pub fn with_profile(profile: Arc<LanguageProfile>, punctuation: Arc<PunctuationSets>) -> Self {
        Self {
            profile,
            punctuation,
            dictionary: HashSet::new(),
            words: Vec::new(),
        }
    }

    /// A new classifier sharing this one's frozen data, with an empty dictionary
    pub fn fork(&self) -> Self {
        Self::with_profile(Arc::clone(&self.profile), Arc::clone(&self.punctuation))
    }

    /// Admit a token unconditionally.
    ///
    /// The entry is appended to the word log; its word and its canonical form
    /// (when non-empty) join the dictionary. Admitting the same word twice is
    /// allowed.
    pub fn add_word(&mut self, entry: WordEntry) {
        let canonical = self.canonical_form(&entry.word);
        if !canonical.is_empty() {
            self.dictionary.insert(canonical);
        }
        self.dictionary.insert(entry.word.clone());
        log::trace!("[{}] admitted {:?}", self.profile.code(), entry.word);
        self.words.push(entry);
    }

    /// Admit a bare word with a count of one
    pub fn add(&mut self, word: &str) {
        self.add_word(WordEntry::new(word));
    }

    /// True iff at least one character is alphabetic
    pub fn is_word(&self, token: &str) -> bool {
        token.chars().any(char::is_alphabetic)
    }

    /// Exact profanity lookup
    pub fn is_profanity(&self, token: &str) -> bool {
        self.profile.is_profanity(token)
    }

    /// Exact stopword lookup
    pub fn is_stopword(&self, token: &str) -> bool {
        self.profile.is_stopword(token)
    }

    /// Whether the token's canonical form has already been admitted.
    ///
    /// A token that is already in canonical form is never reported as a
    /// duplicate, even if it was admitted before: callers must not read
    /// `false` as "never seen". An empty canonical form is never a duplicate.
    pub fn is_duplicate(&self, token: &str) -> bool {
        let canonical = self.canonical_form(token);
        if canonical.is_empty() || canonical == token {
            return false;
        }
        self.dictionary.contains(&canonical)
    }

    /// Permissive URI match; see [`patterns::URI_PATTERN`]
    pub fn is_web(&self, token: &str) -> bool {
        patterns::is_web(token)
    }

    /// Hyphenated UUID with a defined version; parse failures are `false`
    pub fn is_uuid(&self, token: &str) -> bool {
        patterns::is_uuid(token)
    }

    /// Character count exceeds the language's max word length
    pub fn is_too_long(&self, token: &str) -> bool {
        token.chars().count() > self.profile.max_word_length()
    }

    /// Evaluate every predicate
    pub fn classify(&self, token: &str) -> Verdict {
        Verdict {
            word: self.is_word(token),
            profanity: self.is_profanity(token),
            stopword: self.is_stopword(token),
            duplicate: self.is_duplicate(token),
            web: self.is_web(token),
            uuid: self.is_uuid(token),
            too_long: self.is_too_long(token),
        }
    }

    /// Deduplication key for a token under this classifier's punctuation
    pub fn canonical_form(&self, token: &str) -> String {
        canonical_form(token, &self.punctuation)
    }

    /// Whether the string is in the dictionary, verbatim or as a canonical key.
    ///
    /// Admitting `"cat."` makes both `contains("cat.")` and `contains("cat")`
    /// true.
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Admitted entries in admission order
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Number of distinct dictionary keys.
    ///
    /// One admission can add two keys (the word and its canonical form), so
    /// this is not the number of admitted words; use [`Self::words`] for that.
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Language code
    pub fn language(&self) -> &str {
        self.profile.code()
    }

    /// Longest accepted word, in characters
    pub fn max_word_length(&self) -> usize {
        self.profile.max_word_length()
    }

    /// Shared frozen profile
    pub fn profile(&self) -> &Arc<LanguageProfile> {
        &self.profile
    }
}
