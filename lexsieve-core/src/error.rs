//! Error types for classifier construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving configuration or building a classifier.
///
/// Predicates never return errors; everything here happens before a
/// classifier exists.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration setting
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Language code absent from the max word length table
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The configuration file path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Profanity or stopword list could not be loaded
    #[error("Cannot load {}: {source}", path.display())]
    ListLoad {
        /// The list file that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error belongs to the configuration family
    /// (bad settings, unknown language, unreadable config file).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_) | Error::UnsupportedLanguage(_) | Error::ConfigFile { .. }
        )
    }
}

/// Result type for lexsieve operations
pub type Result<T> = std::result::Result<T, Error>;
