//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use lexsieve_core::ClassifierConfig;
use std::path::Path;

pub mod check;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify tokens and optionally admit them to the dictionary
    Check(check::CheckArgs),

    /// Load a configuration and every list it points to
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List configured languages and their max word length
    Languages(list::LanguagesArgs),
}

/// Load a configuration file with CLI context attached
pub(crate) fn load_config(path: &Path) -> Result<ClassifierConfig> {
    ClassifierConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}
