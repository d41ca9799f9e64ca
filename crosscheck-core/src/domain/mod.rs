// crosscheck-core/src/domain/mod.rs

pub mod dialect;
pub mod error;
pub mod outcome;
pub mod query;
pub mod rule;
pub mod spec;
pub mod threshold;
pub mod value;

pub use dialect::Dialect;
pub use error::DomainError;
pub use outcome::{Status, ValidationOutcome};
pub use rule::{RuleType, ThresholdType};
pub use spec::{TableLocator, ValidationSpec};
pub use threshold::Verdict;
pub use value::ScalarValue;
