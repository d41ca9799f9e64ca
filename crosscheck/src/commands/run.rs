// crosscheck/src/commands/run.rs
//
// USE CASE: run the validation batch and report.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};

use crosscheck_core::application::{RunReport, run_validations};
use crosscheck_core::domain::{Status, ValidationOutcome};
use crosscheck_core::infrastructure::adapters::ProfileResolver;
use crosscheck_core::infrastructure::config::{load_connections, load_validations};
use crosscheck_core::infrastructure::report::{default_report_path, write_report};

pub async fn execute(
    validations_path: PathBuf,
    connections_path: PathBuf,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let profiles = load_connections(&connections_path).with_context(|| {
        format!(
            "Failed to load connections from {}",
            connections_path.display()
        )
    })?;
    let specs = load_validations(&validations_path).with_context(|| {
        format!(
            "Failed to load validations from {}",
            validations_path.display()
        )
    })?;
    println!(
        "   {} connection profiles, {} validation specs",
        profiles.len(),
        specs.len()
    );

    // B. Resolver over the configured profiles
    let resolver = ProfileResolver::new(profiles);

    // C. Run the batch (Application Layer)
    let report = run_validations(&resolver, &specs).await;

    // D. Persist + display
    let report_path = output.unwrap_or_else(default_report_path);
    write_report(&report.outcomes, &report_path)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

    print_outcomes(&report.outcomes);
    print_summary(&report);
    println!("📄 Report: {}", report_path.display());
    println!("⏱️  Finished in {:.2?}", start.elapsed());

    if report.success() {
        println!("\n✨ SUCCESS! All validations passed.");
        Ok(())
    } else {
        eprintln!(
            "\n❌ FAILURE. {} failed, {} errored.",
            report.failed(),
            report.errors()
        );
        // Exit with error code for CI/CD
        std::process::exit(1);
    }
}

fn print_outcomes(outcomes: &[ValidationOutcome]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID", "Name", "Status", "Source", "Target", "Diff", "% Diff",
    ]);

    for outcome in outcomes {
        let status_cell = match outcome.status {
            Status::Pass => Cell::new("PASS").fg(Color::Green),
            Status::Fail => Cell::new("FAIL").fg(Color::Red),
            Status::Error => Cell::new("ERROR").fg(Color::Yellow),
        };

        table.add_row(vec![
            Cell::new(&outcome.id),
            Cell::new(&outcome.name),
            status_cell,
            Cell::new(render_value(&outcome.source_value)),
            Cell::new(render_value(&outcome.target_value)),
            Cell::new(render_float(outcome.difference)),
            Cell::new(render_float(outcome.percentage_diff)),
        ]);
    }

    println!("{table}");
}

fn render_value(value: &Option<crosscheck_core::domain::ScalarValue>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "NULL".into())
}

fn render_float(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn print_summary(report: &RunReport) {
    let total = report.outcomes.len();
    println!("\n══════════════ VALIDATION SUMMARY ══════════════");
    println!("Total:   {}", total);
    println!("✅ Pass:  {}", report.passed());
    println!("❌ Fail:  {}", report.failed());
    println!("⚠️  Error: {}", report.errors());

    for outcome in &report.outcomes {
        match outcome.status {
            Status::Fail => println!("  ✗ {}: {}", outcome.id, outcome.name),
            Status::Error => println!(
                "  ⚠ {}: {} ({})",
                outcome.id,
                outcome.name,
                outcome.error_message.as_deref().unwrap_or("unknown error")
            ),
            Status::Pass => {}
        }
    }
}
