// crosscheck/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing)
    // RUST_LOG-style detail via --verbose
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        // --- USE CASE: RUN VALIDATIONS ---
        Commands::Run {
            validations,
            connections,
            output,
        } => commands::run::execute(validations, connections, output).await,

        // --- USE CASE: TEST CONNECTIONS ---
        Commands::TestConnections { connections } => {
            commands::test_connections::execute(connections).await
        }
    }
}
