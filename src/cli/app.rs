//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use partlookup::config::LookupConfig;
use partlookup::output::OutputMode;

/// partlookup - Part number validation and compatibility lookup
#[derive(Parser, Debug)]
#[command(
    name = "partlookup",
    version,
    about = "Part number validation and compatibility lookup",
    long_about = "Validate a part number, check it against the exclusion registry,\n\
                  and list compatible parts from the catalog.\n\n\
                  Part numbers are 4 digits, a dash, and 4+ letters or digits (e.g. 1234-ABCD)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (defaults to ./partlookup.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a part number and resolve compatible parts
    Lookup {
        /// Part number as typed (surrounding whitespace is ignored)
        #[arg(allow_hyphen_values = true)]
        part: String,
    },

    /// Check part number format only (no registry or catalog access)
    Validate {
        /// Part number as typed
        #[arg(allow_hyphen_values = true)]
        part: String,
    },

    /// List the exclusion registry
    Exclusions,

    /// Read part numbers from stdin, one lookup per line
    ///
    /// `:clear` discards the shown result, `:quit` exits.
    Shell,

    /// Show version
    Version,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Lookup { part }) => {
            let config = LookupConfig::discover(cli.config.as_deref())?;
            commands::lookup(&config, &part, output_mode).await
        },
        Some(Command::Validate { part }) => Ok(commands::validate(&part, output_mode)),
        Some(Command::Exclusions) => {
            let config = LookupConfig::discover(cli.config.as_deref())?;
            commands::exclusions(&config, output_mode).await
        },
        Some(Command::Shell) => {
            let config = LookupConfig::discover(cli.config.as_deref())?;
            commands::shell(&config, output_mode).await
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("partlookup v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("partlookup v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'partlookup --help' for usage");
                println!("Run 'partlookup lookup 1234-ABCD' to look up a part");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
