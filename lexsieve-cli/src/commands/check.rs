//! Check command implementation

use crate::input::{resolve_patterns, TokenReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use lexsieve_core::{ClassifierConfig, LanguageClassifier, Verdict};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Tokens to classify (read from stdin when neither tokens nor --input are given)
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Files or patterns with one token per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Language code
    #[arg(short, long, value_name = "CODE")]
    pub language: String,

    /// Profanity list directory, overriding the configuration
    #[arg(long, value_name = "DIR", env = "PROFANITY_PATH")]
    pub profanity_dir: Option<PathBuf>,

    /// Stopword list directory, overriding the configuration
    #[arg(long, value_name = "DIR", env = "STOPWORDS_PATH")]
    pub stopwords_dir: Option<PathBuf>,

    /// Admit acceptable tokens so later tokens are checked against them
    #[arg(long)]
    pub admit: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `token<TAB>labels` line per token
    Text,
    /// JSON array of tokens with every predicate result
    Json,
}

/// Admission policy used by `--admit`.
///
/// `web` is left out: the URI grammar matches every string.
pub fn is_admissible(verdict: &Verdict) -> bool {
    verdict.word
        && !verdict.profanity
        && !verdict.stopword
        && !verdict.duplicate
        && !verdict.uuid
        && !verdict.too_long
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        self.run(formatter.as_mut())
    }

    /// Classify every token into the given formatter
    pub fn run(&self, formatter: &mut dyn OutputFormatter) -> Result<()> {
        let config = self.resolve_config()?;
        let mut classifier = LanguageClassifier::new(&self.language, &config)
            .with_context(|| format!("Failed to build classifier for '{}'", self.language))?;

        let tokens = self.collect_tokens()?;
        log::info!("Classifying {} tokens", tokens.len());

        let mut admitted_count = 0usize;
        for token in &tokens {
            let verdict = classifier.classify(token);
            let admitted = self.admit && is_admissible(&verdict);
            if admitted {
                classifier.add(token);
                admitted_count += 1;
            }
            formatter.format_token(token, &verdict, admitted)?;
        }
        formatter.finish()?;

        if self.admit {
            log::info!(
                "Admitted {} of {} tokens ({} dictionary keys)",
                admitted_count,
                tokens.len(),
                classifier.dictionary_len()
            );
        }
        Ok(())
    }

    fn resolve_config(&self) -> Result<ClassifierConfig> {
        let config = super::load_config(&self.config)?;
        if self.profanity_dir.is_none() && self.stopwords_dir.is_none() {
            return Ok(config);
        }

        let mut builder = config.to_builder();
        if let Some(dir) = &self.profanity_dir {
            log::debug!("Profanity directory overridden: {}", dir.display());
            builder = builder.profanity_dir(dir);
        }
        if let Some(dir) = &self.stopwords_dir {
            log::debug!("Stopword directory overridden: {}", dir.display());
            builder = builder.stopwords_dir(dir);
        }
        Ok(builder.build()?)
    }

    fn collect_tokens(&self) -> Result<Vec<String>> {
        let mut tokens = self.tokens.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading tokens from {}", path.display());
                tokens.extend(TokenReader::read_file(&path)?);
            }
        } else if tokens.is_empty() {
            tokens = TokenReader::read_stdin()?;
        }

        Ok(tokens)
    }
}
