//! Plain text output formatter

use super::{verdict_labels, OutputFormatter};
use anyhow::Result;
use lexsieve_core::Verdict;
use std::io::Write;

/// Plain text formatter - one `token<TAB>labels` line per token
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &str, verdict: &Verdict, admitted: bool) -> Result<()> {
        let mut labels = verdict_labels(verdict);
        if admitted {
            labels.push("admitted");
        }
        let labels = if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(",")
        };
        writeln!(self.writer, "{token}\t{labels}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
