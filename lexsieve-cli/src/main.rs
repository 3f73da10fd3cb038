//! lexsieve command-line entry point

use anyhow::Result;
use clap::Parser;
use lexsieve_cli::commands::{Commands, ListCommands};

/// Inspect how the lexsieve classifier treats tokens
#[derive(Debug, Parser)]
#[command(name = "lexsieve", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    log::debug!("Arguments: {:?}", cli);

    match &cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Languages(args) => args.execute(),
        },
    }
}
