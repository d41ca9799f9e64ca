// crosscheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid rule type: {0}")]
    #[diagnostic(
        code(crosscheck::domain::rule_type),
        help("Supported types: COUNT_STAR, COUNT_COLUMN, SUM, AVG, MIN, MAX, COUNT_DISTINCT, COUNT_NULL, COUNT_NOT_NULL, CUSTOM.")
    )]
    InvalidRuleType(String),

    #[error("Validation spec '{spec_id}' is invalid: {reason}")]
    #[diagnostic(code(crosscheck::domain::spec))]
    InvalidSpec { spec_id: String, reason: String },
}
