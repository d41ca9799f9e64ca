use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing a crosscheck test project on disk.
struct CrosscheckTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl CrosscheckTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    fn crosscheck(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crosscheck"));
        cmd.current_dir(&self.root);
        cmd
    }

    /// A source/target pair backed by two CSV files plus the matching
    /// connections file.
    fn seed_csv_pair(&self, source_rows: &str, target_rows: &str) -> Result<()> {
        self.write("source.csv", source_rows)?;
        self.write("target.csv", target_rows)?;
        self.write(
            "connections.yaml",
            r#"
connections:
  source_file:
    type: csv
    path: source.csv
  target_file:
    type: csv
    path: target.csv
"#,
        )?;
        Ok(())
    }
}

#[test]
fn test_help_lists_subcommands() -> Result<()> {
    Command::new(assert_cmd::cargo::cargo_bin!("crosscheck"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("test-connections"));
    Ok(())
}

#[test]
fn test_run_passes_on_identical_files() -> Result<()> {
    let env = CrosscheckTestEnv::new()?;
    let rows = "id,amount\n1,10\n2,20\n3,30\n";
    env.seed_csv_pair(rows, rows)?;
    env.write(
        "validations.yaml",
        r#"
validations:
  - id: V001
    name: Row counts match
    rule_type: COUNT_STAR
    source: {connection: source_file, table: ignored}
    target: {connection: target_file, table: ignored}
  - id: V002
    name: Amount totals match
    rule_type: SUM
    source: {connection: source_file, table: ignored, column: amount}
    target: {connection: target_file, table: ignored, column: amount}
"#,
    )?;

    env.crosscheck()
        .args(["run", "--output", "report.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));

    let report = fs::read_to_string(env.root.join("report.csv"))?;
    assert_eq!(report.lines().count(), 3); // header + 2 outcomes
    assert!(report.contains("V001,Row counts match,PASS"));
    assert!(report.contains("V002,Amount totals match,PASS"));
    Ok(())
}

#[test]
fn test_run_fails_on_divergent_aggregates() -> Result<()> {
    let env = CrosscheckTestEnv::new()?;
    env.seed_csv_pair("id,amount\n1,10\n2,20\n", "id,amount\n1,10\n")?;
    env.write(
        "validations.yaml",
        r#"
validations:
  - id: V001
    name: Row counts match
    rule_type: COUNT_STAR
    source: {connection: source_file, table: ignored}
    target: {connection: target_file, table: ignored}
"#,
    )?;

    env.crosscheck()
        .args(["run", "--output", "report.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAILURE"));

    let report = fs::read_to_string(env.root.join("report.csv"))?;
    assert!(report.contains("V001,Row counts match,FAIL"));
    Ok(())
}

#[test]
fn test_run_survives_a_broken_spec() -> Result<()> {
    let env = CrosscheckTestEnv::new()?;
    let rows = "id,amount\n1,10\n";
    env.seed_csv_pair(rows, rows)?;
    env.write(
        "validations.yaml",
        r#"
validations:
  - id: V001
    name: Broken column
    rule_type: SUM
    source: {connection: source_file, table: ignored, column: no_such_column}
    target: {connection: target_file, table: ignored, column: no_such_column}
  - id: V002
    name: Healthy count
    rule_type: COUNT_STAR
    source: {connection: source_file, table: ignored}
    target: {connection: target_file, table: ignored}
"#,
    )?;

    // Exit code is non-zero because of the ERROR outcome, but the healthy
    // spec still produced its own row.
    env.crosscheck()
        .args(["run", "--output", "report.csv"])
        .assert()
        .failure();

    let report = fs::read_to_string(env.root.join("report.csv"))?;
    assert!(report.contains("V001,Broken column,ERROR"));
    assert!(report.contains("V002,Healthy count,PASS"));
    Ok(())
}

#[test]
fn test_run_percentage_threshold_within_tolerance() -> Result<()> {
    let env = CrosscheckTestEnv::new()?;
    env.seed_csv_pair(
        "id,amount\n1,50\n2,50\n",  // SUM = 100
        "id,amount\n1,50\n2,51\n",  // SUM = 101 -> 1% off
    )?;
    env.write(
        "validations.yaml",
        r#"
validations:
  - id: V001
    name: Totals within one percent
    rule_type: SUM
    threshold_type: PERCENTAGE
    threshold_value: 0.01
    source: {connection: source_file, table: ignored, column: amount}
    target: {connection: target_file, table: ignored, column: amount}
"#,
    )?;

    env.crosscheck()
        .args(["run", "--output", "report.csv"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_missing_validations_file_is_fatal() -> Result<()> {
    let env = CrosscheckTestEnv::new()?;
    env.write("connections.yaml", "connections:\n  x: {type: duckdb}\n")?;

    env.crosscheck()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("validations"));
    Ok(())
}

#[test]
fn test_test_connections_reports_health() -> Result<()> {
    let env = CrosscheckTestEnv::new()?;
    env.write("data.csv", "id\n1\n")?;
    env.write(
        "connections.yaml",
        r#"
connections:
  healthy_csv:
    type: csv
    path: data.csv
  missing_csv:
    type: csv
    path: nope.csv
"#,
    )?;

    env.crosscheck()
        .arg("test-connections")
        .assert()
        .failure()
        .stdout(predicate::str::contains("healthy_csv"))
        .stdout(predicate::str::contains("FAIL"));
    Ok(())
}
