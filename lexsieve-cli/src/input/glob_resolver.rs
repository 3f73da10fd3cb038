//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Keep first-seen order, drop repeats
    let mut seen = std::collections::HashSet::new();
    files.retain(|path| seen.insert(path.clone()));

    Ok(files)
}
