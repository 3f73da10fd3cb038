//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use lexsieve_core::LanguageProfile;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Only validate this language (default: every configured language)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Validating configuration: {}", self.config.display())?;
        let config = super::load_config(&self.config)?;

        let languages: Vec<String> = match &self.language {
            Some(code) => vec![code.clone()],
            None => config.languages().map(str::to_owned).collect(),
        };

        let mut failures = 0;
        for code in &languages {
            match LanguageProfile::load(code, &config) {
                Ok(profile) => {
                    writeln!(
                        out,
                        "✓ {code}: {} profanity entries, {} stopwords, max length {}",
                        profile.profanity().len(),
                        profile.stopwords().len(),
                        profile.max_word_length()
                    )?;
                }
                Err(e) => {
                    log::error!("{code}: {e}");
                    writeln!(out, "✗ {code}: {e}")?;
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            return Err(CliError::ValidationFailed(failures).into());
        }

        writeln!(out, "Configuration is valid!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use std::fs;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
            language: None,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let (_dir, config) = fixtures::workspace();
        let args = ValidateArgs {
            config,
            language: None,
        };

        let mut out = Vec::new();
        args.write_to(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("✓ en: 1 profanity entries, 2 stopwords, max length 12"));
        assert!(output.contains("Configuration is valid!"));
    }

    #[test]
    fn test_validate_missing_list() {
        let (dir, config) = fixtures::workspace();
        fs::remove_file(dir.path().join("stopwords/en.txt")).unwrap();
        let args = ValidateArgs {
            config,
            language: None,
        };

        let mut out = Vec::new();
        let err = args.write_to(&mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed(1))
        ));
        assert!(String::from_utf8(out).unwrap().contains("✗ en: Cannot load"));
    }

    #[test]
    fn test_validate_unknown_language() {
        let (_dir, config) = fixtures::workspace();
        let args = ValidateArgs {
            config,
            language: Some("xx".to_string()),
        };

        let mut out = Vec::new();
        assert!(args.write_to(&mut out).is_err());
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("✗ xx: Unsupported language: xx"));
    }
}
