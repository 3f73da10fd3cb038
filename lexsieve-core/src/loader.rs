//! Word list loader
//!
//! Lists are plain text, one entry per line. Entries are stored exactly as
//! written: only the `\n` terminator is removed, and a trailing newline at the
//! end of the file does not produce an empty entry.
//!
//! Encoding is not validated. Bytes that are not UTF-8 are decoded lossily, so
//! the affected entry carries U+FFFD and the rest of the list is unaffected.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a newline-delimited list into a set of exact strings
pub fn load_list(path: &Path) -> Result<HashSet<String>> {
    let bytes = fs::read(path).map_err(|source| Error::ListLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        log::warn!(
            "{} is not valid UTF-8; undecodable bytes were replaced",
            path.display()
        );
    }

    let entries = parse_list(&content);
    log::debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn parse_list(content: &str) -> HashSet<String> {
    if content.is_empty() {
        return HashSet::new();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n').map(str::to_owned).collect()
}
