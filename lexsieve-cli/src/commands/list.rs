//! List command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for `list languages`
#[derive(Debug, Args)]
pub struct LanguagesArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,
}

impl LanguagesArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let config = super::load_config(&self.config)?;
        for code in config.languages() {
            // Every listed code has a table entry
            let max_len = config.max_word_length(code).unwrap_or_default();
            writeln!(out, "{code}\t{max_len}")?;
        }
        Ok(())
    }
}
