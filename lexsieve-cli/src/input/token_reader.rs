//! Token input: one already-extracted token per line

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Reads pre-tokenized input
pub struct TokenReader;

impl TokenReader {
    /// Read every non-empty line of a file as a token
    pub fn read_file(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::split(&content))
    }

    /// Read every non-empty line of a reader as a token
    pub fn read_from(reader: impl BufRead) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line.context("Failed to read tokens")?;
            if !line.is_empty() {
                tokens.push(line);
            }
        }
        Ok(tokens)
    }

    /// Read tokens from standard input
    pub fn read_stdin() -> Result<Vec<String>> {
        Self::read_from(io::stdin().lock())
    }

    fn split(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
