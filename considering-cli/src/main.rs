//! considering: check, summarize and filter user stories
//!
//! Sentences are checked against `As a <user>, I want to <action> so that <purpose>`.
//! Files hold one statement per line, or a JSON array of tagged statements.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use considering_pipeline::StoreFormat;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "considering")]
#[command(about = "Query user stories written as plain sentences", long_about = None)]
#[command(version)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check sentences against the user story grammar
    Check {
        /// Sentences to check
        #[arg(required = true)]
        sentences: Vec<String>,
    },

    /// Count valid and invalid user stories in a file
    Summary {
        /// File of statements
        path: PathBuf,

        /// File layout (default: json for .json files, lines otherwise)
        #[arg(long, short, value_enum)]
        format: Option<Format>,
    },

    /// List the statements of a file carrying a tag
    Filter {
        /// File of statements
        path: PathBuf,

        /// Tag to keep
        #[arg(long, short, default_value = "User Story")]
        tag: String,

        /// File layout (default: json for .json files, lines otherwise)
        #[arg(long, short, value_enum)]
        format: Option<Format>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Lines,
    Json,
}

fn store_format(format: Option<Format>, path: &Path) -> StoreFormat {
    match format {
        Some(Format::Lines) => StoreFormat::Lines,
        Some(Format::Json) => StoreFormat::Json,
        None => StoreFormat::from_path(path),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Commands::Check { sentences } => commands::check(&sentences, cli.json)?,
        Commands::Summary { path, format } => {
            let format = store_format(format, &path);
            commands::summary(&path, format, cli.json)?
        }
        Commands::Filter { path, tag, format } => {
            let format = store_format(format, &path);
            commands::filter(&path, format, &tag, cli.json)?
        }
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter() {
        let cli = Cli::parse_from(["considering", "-vv", "filter", "stories.json", "--json"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        match cli.command {
            Commands::Filter { path, tag, format } => {
                assert_eq!(tag, "User Story");
                assert_eq!(format, None);
                assert_eq!(store_format(format, &path), StoreFormat::Json);
            }
            _ => panic!("expected filter"),
        }
    }

    #[test]
    fn test_check_needs_a_sentence() {
        assert!(Cli::try_parse_from(["considering", "check"]).is_err());
    }
}
