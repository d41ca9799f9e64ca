// crosscheck/src/commands/test_connections.rs
//
// USE CASE: verify every configured connection can be opened and pinged.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};

use crosscheck_core::infrastructure::adapters::ProfileResolver;
use crosscheck_core::infrastructure::config::load_connections;
use crosscheck_core::ports::ConnectionResolver;

pub async fn execute(connections_path: PathBuf) -> anyhow::Result<()> {
    println!("🔌 Testing all connections...");
    let profiles = load_connections(&connections_path).with_context(|| {
        format!(
            "Failed to load connections from {}",
            connections_path.display()
        )
    })?;

    let mut names: Vec<String> = profiles.keys().cloned().collect();
    names.sort_unstable();
    let resolver = ProfileResolver::new(profiles);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Connection", "Status", "Detail"]);

    let mut all_passed = true;
    for name in &names {
        // Open, ping, release: the same scoped lifecycle the runner uses
        let result = async {
            let mut conn = resolver.open(name).await?;
            let ping = conn.ping().await;
            let closed = conn.close().await;
            ping?;
            closed
        }
        .await;

        match result {
            Ok(()) => {
                table.add_row(vec![
                    Cell::new(name),
                    Cell::new("PASS").fg(Color::Green),
                    Cell::new(""),
                ]);
            }
            Err(e) => {
                all_passed = false;
                table.add_row(vec![
                    Cell::new(name),
                    Cell::new("FAIL").fg(Color::Red),
                    Cell::new(e.to_string()),
                ]);
            }
        }
    }

    println!("{table}");

    if all_passed {
        println!("✨ All {} connections healthy.", names.len());
        Ok(())
    } else {
        eprintln!("❌ Some connections failed.");
        std::process::exit(1);
    }
}
