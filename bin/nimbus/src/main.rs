//! Nimbus CLI
//!
//! Developer tooling for the Nimbus design library site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Nimbus.
#[derive(Parser)]
#[command(
    name = "nimbus",
    version,
    about = "Query the design library search catalog and validate site config"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "nimbus.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Run a command palette query against the catalog
    Search {
        /// Query terms, joined with spaces
        terms: Vec<String>,
        /// JSON catalog to search instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print grouped results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and the search catalog
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    nimbus::init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            terms,
            catalog,
            json,
        } => {
            nimbus::cmd::search::run(&cli.config, &terms, catalog.as_deref(), json)?;
        }
        Commands::Check { strict } => {
            nimbus::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_search_command_parsing() {
        let args = ["nimbus", "search", "color", "palette"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, PathBuf::from("nimbus.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Search {
                terms,
                catalog,
                json,
            } => {
                assert_eq!(terms, vec!["color", "palette"]);
                assert!(catalog.is_none());
                assert!(!json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_without_terms_browses() {
        let cli = Cli::parse_from(["nimbus", "search", "--json"]);

        match cli.command {
            Commands::Search { terms, json, .. } => {
                assert!(terms.is_empty());
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_with_catalog() {
        let cli = Cli::parse_from(["nimbus", "search", "--catalog", "records.json", "tabs"]);

        match cli.command {
            Commands::Search { terms, catalog, .. } => {
                assert_eq!(terms, vec!["tabs"]);
                assert_eq!(catalog, Some(PathBuf::from("records.json")));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["nimbus", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_and_config() {
        let cli = Cli::parse_from(["nimbus", "-vv", "--config", "site.toml", "check"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
