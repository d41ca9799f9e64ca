// crosscheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crosscheck")]
#[command(about = "Aggregate-level data load validation between data stores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs all enabled validations and writes the CSV report
    Run {
        /// Path to the YAML validations file
        #[arg(long, default_value = "validations.yaml")]
        validations: PathBuf,

        /// Path to the YAML connections file
        #[arg(long, default_value = "connections.yaml")]
        connections: PathBuf,

        /// Report path (default: output/validation_report_TIMESTAMP.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 🔌 Opens and pings every configured connection, then exits
    TestConnections {
        /// Path to the YAML connections file
        #[arg(long, default_value = "connections.yaml")]
        connections: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_run_defaults() -> Result<()> {
        let args = Cli::parse_from(["crosscheck", "run"]);
        match args.command {
            Commands::Run {
                validations,
                connections,
                output,
            } => {
                assert_eq!(validations.to_string_lossy(), "validations.yaml");
                assert_eq!(connections.to_string_lossy(), "connections.yaml");
                assert_eq!(output, None);
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_run_with_output() -> Result<()> {
        let args = Cli::parse_from([
            "crosscheck",
            "run",
            "--validations",
            "specs.yaml",
            "--output",
            "/tmp/report.csv",
        ]);
        match args.command {
            Commands::Run {
                validations,
                output,
                ..
            } => {
                assert_eq!(validations.to_string_lossy(), "specs.yaml");
                assert_eq!(
                    output.map(|p| p.to_string_lossy().into_owned()),
                    Some("/tmp/report.csv".to_string())
                );
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_test_connections() -> Result<()> {
        let args = Cli::parse_from(["crosscheck", "test-connections", "--verbose"]);
        assert!(args.verbose);
        match args.command {
            Commands::TestConnections { connections } => {
                assert_eq!(connections.to_string_lossy(), "connections.yaml");
                Ok(())
            }
            _ => bail!("Expected TestConnections command"),
        }
    }
}
