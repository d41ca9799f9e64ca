// crosscheck-core/src/domain/rule.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of aggregate computed on both sides of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    CountStar,
    CountColumn,
    Sum,
    Avg,
    Min,
    Max,
    CountDistinct,
    CountNull,
    CountNotNull,
    Custom,
}

impl RuleType {
    /// Rules aggregating a specific column. COUNT_STAR and CUSTOM are the
    /// only ones that work without one.
    pub fn requires_column(&self) -> bool {
        !matches!(self, RuleType::CountStar | RuleType::Custom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::CountStar => "COUNT_STAR",
            RuleType::CountColumn => "COUNT_COLUMN",
            RuleType::Sum => "SUM",
            RuleType::Avg => "AVG",
            RuleType::Min => "MIN",
            RuleType::Max => "MAX",
            RuleType::CountDistinct => "COUNT_DISTINCT",
            RuleType::CountNull => "COUNT_NULL",
            RuleType::CountNotNull => "COUNT_NOT_NULL",
            RuleType::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tolerance policy used to judge the source/target comparison.
/// Deserialised by serde, so an unknown value is rejected at parse time,
/// never at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdType {
    #[default]
    Exact,
    Percentage,
    Absolute,
}

impl ThresholdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdType::Exact => "EXACT",
            ThresholdType::Percentage => "PERCENTAGE",
            ThresholdType::Absolute => "ABSOLUTE",
        }
    }
}

impl fmt::Display for ThresholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
