//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// One or more language profiles failed to load
    ValidationFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ValidationFailed(count) => {
                write!(f, "Validation failed for {count} language(s)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("tokens.txt".to_string());
        assert_eq!(error.to_string(), "File not found: tokens.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_validation_failed_display() {
        let error = CliError::ValidationFailed(2);
        assert_eq!(error.to_string(), "Validation failed for 2 language(s)");
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("x.txt".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("x.txt"));
    }
}
