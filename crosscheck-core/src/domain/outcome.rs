// crosscheck-core/src/domain/outcome.rs

use serde::Serialize;
use std::fmt;

use crate::domain::rule::{RuleType, ThresholdType};
use crate::domain::threshold::Verdict;
use crate::domain::value::ScalarValue;

/// Terminal status of one executed validation. Never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Verdict> for Status {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Pass => Status::Pass,
            Verdict::Fail => Status::Fail,
        }
    }
}

/// The recorded result of executing one validation spec.
/// Constructed once, immutable afterwards; one per enabled spec per run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub id: String,
    pub name: String,
    pub status: Status,

    pub source_value: Option<ScalarValue>,
    pub target_value: Option<ScalarValue>,
    /// target - source; absent if either side is null/non-numeric
    pub difference: Option<f64>,
    /// difference / source * 100; absent if source is null or zero
    pub percentage_diff: Option<f64>,

    pub source_details: String,
    pub target_details: String,

    pub rule_type: RuleType,
    pub threshold_type: ThresholdType,
    pub threshold_value: f64,

    pub source_query: Option<String>,
    pub target_query: Option<String>,
    /// Present iff status is ERROR
    pub error_message: Option<String>,

    pub execution_timestamp: String,
}
