//! Classifier configuration
//!
//! Everything the classifier needs from the outside world lives here: the two
//! list directories, the per-language max word length table and the
//! punctuation sets used to build canonical forms. A configuration is resolved
//! once, validated, and then passed explicitly to every constructor.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable consulted by [`ConfigBuilder::from_env`] for the
/// profanity list directory
pub const PROFANITY_PATH_ENV: &str = "PROFANITY_PATH";

/// Environment variable consulted by [`ConfigBuilder::from_env`] for the
/// stopword list directory
pub const STOPWORDS_PATH_ENV: &str = "STOPWORDS_PATH";

/// Extension appended to a language code to form a list file name
pub const LIST_EXTENSION: &str = "txt";

/// Punctuation characters used when computing canonical forms.
///
/// `strip` characters are removed from anywhere in a token. `edge` characters
/// are the stricter subset that is only dropped from the first and last
/// position. Contents are integrator data; the default is two empty sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunctuationSets {
    strip: HashSet<char>,
    edge: HashSet<char>,
}

impl PunctuationSets {
    /// Build from any two character sources
    pub fn new(strip: impl IntoIterator<Item = char>, edge: impl IntoIterator<Item = char>) -> Self {
        Self {
            strip: strip.into_iter().collect(),
            edge: edge.into_iter().collect(),
        }
    }

    /// Build from two strings, one character per set member
    pub fn from_strs(strip: &str, edge: &str) -> Self {
        Self::new(strip.chars(), edge.chars())
    }

    /// Whether `ch` is removed wherever it occurs
    #[inline]
    pub fn strips(&self, ch: char) -> bool {
        self.strip.contains(&ch)
    }

    /// Whether `ch` is dropped when it opens or closes a token
    #[inline]
    pub fn is_edge(&self, ch: char) -> bool {
        self.edge.contains(&ch)
    }

    /// True when both sets are empty
    pub fn is_empty(&self) -> bool {
        self.strip.is_empty() && self.edge.is_empty()
    }
}

/// TOML schema of a configuration file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    profanity_dir: PathBuf,
    stopwords_dir: PathBuf,
    #[serde(default)]
    max_word_length: BTreeMap<String, usize>,
    #[serde(default)]
    punctuation: PunctuationFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PunctuationFile {
    #[serde(default)]
    strip: String,
    #[serde(default)]
    edge: String,
}

/// Resolved, validated classifier configuration
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub(crate) profanity_dir: PathBuf,
    pub(crate) stopwords_dir: PathBuf,
    pub(crate) max_word_lengths: BTreeMap<String, usize>,
    pub(crate) punctuation: Arc<PunctuationSets>,
}

impl ClassifierConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Start a builder pre-filled with this configuration, for overrides
    pub fn to_builder(&self) -> ConfigBuilder {
        ConfigBuilder {
            profanity_dir: Some(self.profanity_dir.clone()),
            stopwords_dir: Some(self.stopwords_dir.clone()),
            max_word_lengths: self.max_word_lengths.clone(),
            punctuation: (*self.punctuation).clone(),
        }
    }

    /// Load a configuration from a TOML file.
    ///
    /// Relative list directories are resolved against the directory that
    /// contains the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, Some(base)).map_err(|e| match e {
            Error::Configuration(reason) => Error::ConfigFile {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Load a configuration from TOML text; directories are taken verbatim
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, None)
    }

    fn parse(content: &str, base: Option<&Path>) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("failed to parse TOML: {e}")))?;

        let resolve = |dir: PathBuf| match base {
            Some(base) if dir.is_relative() && !dir.as_os_str().is_empty() => base.join(dir),
            _ => dir,
        };

        let mut builder = ConfigBuilder::new()
            .profanity_dir(resolve(file.profanity_dir))
            .stopwords_dir(resolve(file.stopwords_dir))
            .punctuation(PunctuationSets::from_strs(
                &file.punctuation.strip,
                &file.punctuation.edge,
            ));
        for (code, max_len) in file.max_word_length {
            builder = builder.max_word_length(code, max_len);
        }
        builder.build()
    }

    /// Directory holding `{code}.txt` profanity lists
    pub fn profanity_dir(&self) -> &Path {
        &self.profanity_dir
    }

    /// Directory holding `{code}.txt` stopword lists
    pub fn stopwords_dir(&self) -> &Path {
        &self.stopwords_dir
    }

    /// Profanity list path for a language
    pub fn profanity_list_path(&self, code: &str) -> PathBuf {
        list_path(&self.profanity_dir, code)
    }

    /// Stopword list path for a language
    pub fn stopwords_list_path(&self, code: &str) -> PathBuf {
        list_path(&self.stopwords_dir, code)
    }

    /// Max word length for a language, `None` when the code is unsupported
    pub fn max_word_length(&self, code: &str) -> Option<usize> {
        self.max_word_lengths.get(code).copied()
    }

    /// Whether the code appears in the max word length table
    pub fn supports(&self, code: &str) -> bool {
        self.max_word_lengths.contains_key(code)
    }

    /// Configured language codes, sorted
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.max_word_lengths.keys().map(String::as_str)
    }

    /// Punctuation sets shared by every classifier built from this config
    pub fn punctuation(&self) -> &Arc<PunctuationSets> {
        &self.punctuation
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.profanity_dir.as_os_str().is_empty() {
            return Err(Error::Configuration(
                "profanity_dir must not be empty".into(),
            ));
        }

        if self.stopwords_dir.as_os_str().is_empty() {
            return Err(Error::Configuration(
                "stopwords_dir must not be empty".into(),
            ));
        }

        if self.max_word_lengths.is_empty() {
            return Err(Error::Configuration(
                "max_word_length table has no languages".into(),
            ));
        }

        for (code, &max_len) in &self.max_word_lengths {
            if code.trim().is_empty() {
                return Err(Error::Configuration(
                    "language code must not be empty".into(),
                ));
            }
            if max_len == 0 {
                return Err(Error::Configuration(format!(
                    "max_word_length for '{code}' must be greater than 0"
                )));
            }
        }

        Ok(())
    }
}

fn list_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{code}.{LIST_EXTENSION}"))
}

/// Fluent builder for [`ClassifierConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    profanity_dir: Option<PathBuf>,
    stopwords_dir: Option<PathBuf>,
    max_word_lengths: BTreeMap<String, usize>,
    punctuation: PunctuationSets,
}

impl ConfigBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose list directories come from
    /// `PROFANITY_PATH` and `STOPWORDS_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|p| !p.as_os_str().is_empty());
        Self {
            profanity_dir: non_empty(PROFANITY_PATH_ENV),
            stopwords_dir: non_empty(STOPWORDS_PATH_ENV),
            ..Self::default()
        }
    }

    /// Set the profanity list directory
    pub fn profanity_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profanity_dir = Some(dir.into());
        self
    }

    /// Set the stopword list directory
    pub fn stopwords_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stopwords_dir = Some(dir.into());
        self
    }

    /// Register a language and its max word length
    pub fn max_word_length(mut self, code: impl Into<String>, max_len: usize) -> Self {
        self.max_word_lengths.insert(code.into(), max_len);
        self
    }

    /// Set the punctuation sets
    pub fn punctuation(mut self, punctuation: PunctuationSets) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClassifierConfig> {
        let profanity_dir = self.profanity_dir.ok_or_else(|| {
            Error::Configuration(format!(
                "profanity_dir is not set (configure it or set {PROFANITY_PATH_ENV})"
            ))
        })?;
        let stopwords_dir = self.stopwords_dir.ok_or_else(|| {
            Error::Configuration(format!(
                "stopwords_dir is not set (configure it or set {STOPWORDS_PATH_ENV})"
            ))
        })?;

        let config = ClassifierConfig {
            profanity_dir,
            stopwords_dir,
            max_word_lengths: self.max_word_lengths,
            punctuation: Arc::new(self.punctuation),
        };

        config.validate()?;
        Ok(config)
    }
}
