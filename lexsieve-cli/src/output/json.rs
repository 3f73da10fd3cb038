//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexsieve_core::Verdict;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs classifications as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<TokenRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct TokenRecord {
    /// The token as given
    pub token: String,
    /// Every predicate result
    pub verdict: Verdict,
    /// Whether the token was admitted to the dictionary
    pub admitted: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &str, verdict: &Verdict, admitted: bool) -> Result<()> {
        self.records.push(TokenRecord {
            token: token.to_string(),
            verdict: *verdict,
            admitted,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        let verdict = Verdict {
            word: true,
            duplicate: true,
            ..Verdict::default()
        };
        formatter.format_token("Cat!", &verdict, false).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["token"], "Cat!");
        assert_eq!(records[0]["verdict"]["duplicate"], true);
        assert_eq!(records[0]["verdict"]["uuid"], false);
        assert_eq!(records[0]["admitted"], false);
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
