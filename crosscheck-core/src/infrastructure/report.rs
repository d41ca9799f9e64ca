// crosscheck-core/src/infrastructure/report.rs
//
// CSV rendering of a run's outcomes. One row per outcome, stable column
// order so downstream tooling can rely on it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::outcome::ValidationOutcome;
use crate::infrastructure::error::InfrastructureError;

const HEADER: &str = "validation_id,validation_name,status,source_value,target_value,\
difference,percentage_diff,source_details,target_details,rule_type,threshold_type,\
threshold_value,execution_timestamp,error_message";

/// Default report location: output/validation_report_<timestamp>.csv
pub fn default_report_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from("output").join(format!("validation_report_{}.csv", timestamp))
}

pub fn write_report(
    outcomes: &[ValidationOutcome],
    path: &Path,
) -> Result<(), InfrastructureError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut content = String::from(HEADER);
    content.push('\n');
    for outcome in outcomes {
        content.push_str(&render_row(outcome));
        content.push('\n');
    }

    fs::write(path, content)?;
    info!(path = %path.display(), rows = outcomes.len(), "Report written");
    Ok(())
}

fn render_row(outcome: &ValidationOutcome) -> String {
    let fields = [
        outcome.id.clone(),
        outcome.name.clone(),
        outcome.status.to_string(),
        outcome
            .source_value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        outcome
            .target_value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        outcome
            .difference
            .map(|d| d.to_string())
            .unwrap_or_default(),
        outcome
            .percentage_diff
            .map(|d| d.to_string())
            .unwrap_or_default(),
        outcome.source_details.clone(),
        outcome.target_details.clone(),
        outcome.rule_type.to_string(),
        outcome.threshold_type.to_string(),
        outcome.threshold_value.to_string(),
        outcome.execution_timestamp.clone(),
        outcome.error_message.clone().unwrap_or_default(),
    ];

    fields
        .iter()
        .map(|f| escape_csv(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// RFC 4180 quoting: only fields containing separators, quotes or
/// newlines are wrapped.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::outcome::Status;
    use crate::domain::rule::{RuleType, ThresholdType};
    use crate::domain::value::ScalarValue;

    fn outcome(id: &str, status: Status) -> ValidationOutcome {
        ValidationOutcome {
            id: id.into(),
            name: "Orders, by day".into(),
            status,
            source_value: Some(ScalarValue::Int(100)),
            target_value: Some(ScalarValue::Int(99)),
            difference: Some(-1.0),
            percentage_diff: Some(-1.0),
            source_details: "wh:prod:dbo:orders".into(),
            target_details: "lake:orders".into(),
            rule_type: RuleType::CountStar,
            threshold_type: ThresholdType::Exact,
            threshold_value: 0.0,
            source_query: Some("SELECT COUNT(*) FROM orders".into()),
            target_query: Some("SELECT COUNT(*) FROM orders".into()),
            error_message: None,
            execution_timestamp: "2026-01-01 00:00:00".into(),
        }
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_report_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_report(&[outcome("V1", Status::Fail)], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("validation_id,"));
        let row = lines.next().unwrap();
        // Name contains a comma, so it must be quoted
        assert!(row.contains("\"Orders, by day\""));
        assert!(row.contains("FAIL"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.csv");
        write_report(&[outcome("V1", Status::Pass)], &path).unwrap();
        assert!(path.exists());
    }
}
