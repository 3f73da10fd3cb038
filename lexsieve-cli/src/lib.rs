//! lexsieve CLI library
//!
//! Command-line inspection tool over the lexsieve token classifier: classify
//! tokens, validate list configuration, list configured languages.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
