//! Per-language token classifier for corpus cleaning
//!
//! For each token handed over by an upstream tokenizer, a
//! [`LanguageClassifier`] answers whether it is a word, profanity, a stopword,
//! a near-duplicate of something already admitted, a web locator or a UUID.
//!
//! # Architecture
//!
//! - [`config`]: explicit configuration (list directories, max word length
//!   table, punctuation sets), from TOML, a builder or the environment
//! - [`profile`]: frozen per-language lists, loaded once
//! - [`classifier`]: predicates plus the growing dictionary
//! - [`patterns`]: URI and UUID recognition
//!
//! # Example
//!
//! ```rust,no_run
//! use lexsieve_core::{ClassifierConfig, LanguageClassifier};
//!
//! let config = ClassifierConfig::from_file("lexsieve.toml")?;
//! let mut classifier = LanguageClassifier::new("en", &config)?;
//!
//! for token in ["The", "cat.", "Cat!", "https://example.com"] {
//!     let verdict = classifier.classify(token);
//!     if verdict.word && !verdict.stopword && !verdict.profanity && !verdict.duplicate {
//!         classifier.add(token);
//!     }
//! }
//! # Ok::<(), lexsieve_core::Error>(())
//! ```

pub mod canonical;
pub mod classifier;
pub mod config;
pub mod error;
pub mod loader;
pub mod patterns;
pub mod profile;

pub use canonical::canonical_form;
pub use classifier::{LanguageClassifier, Verdict, WordEntry};
pub use config::{ClassifierConfig, ConfigBuilder, PunctuationSets};
pub use error::{Error, Result};
pub use profile::LanguageProfile;
