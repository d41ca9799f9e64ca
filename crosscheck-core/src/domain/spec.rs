// crosscheck-core/src/domain/spec.rs

use serde::Deserialize;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::query::QueryInput;
use crate::domain::rule::{RuleType, ThresholdType};

/// One side of a validation: where the aggregate is computed.
#[derive(Debug, Clone, Deserialize)]
pub struct TableLocator {
    /// Name of a connection profile from the connections file
    pub connection: String,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub table: String,
    pub column: Option<String>,
    /// Raw SQL expression replacing `column` inside the aggregate
    pub column_expression: Option<String>,
    /// Raw predicate appended as a WHERE clause
    pub filter: Option<String>,
}

impl TableLocator {
    /// The column expression wins over the plain column name.
    pub fn effective_column(&self) -> Option<&str> {
        self.column_expression
            .as_deref()
            .or(self.column.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Human-readable location summary: connection:database:schema:table
    pub fn details(&self) -> String {
        let mut parts = vec![self.connection.as_str()];
        if let Some(db) = self.database.as_deref() {
            parts.push(db);
        }
        if let Some(sc) = self.schema.as_deref() {
            parts.push(sc);
        }
        parts.push(self.table.as_str());
        parts.join(":")
    }
}

/// One configured comparison between a source and a target aggregate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidationSpec {
    pub id: String,
    pub name: String,

    pub source: TableLocator,
    pub target: TableLocator,

    pub rule_type: RuleType,
    /// Required iff rule_type is CUSTOM; substituted verbatim
    pub custom_expression: Option<String>,

    #[serde(default)]
    pub threshold_type: ThresholdType,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "threshold_value must be non-negative"))]
    pub threshold_value: f64,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ValidationSpec {
    /// Cross-field checks serde cannot express. Called at config load time
    /// so a bad spec is skipped before any connection is opened.
    pub fn check(&self) -> Result<(), DomainError> {
        if self.rule_type == RuleType::Custom
            && self
                .custom_expression
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .is_none()
        {
            return Err(DomainError::InvalidSpec {
                spec_id: self.id.clone(),
                reason: "custom_expression is required for CUSTOM rule type".into(),
            });
        }
        if self.rule_type.requires_column()
            && self.source.effective_column().is_none()
            && self.target.effective_column().is_none()
        {
            return Err(DomainError::InvalidSpec {
                spec_id: self.id.clone(),
                reason: format!("rule type {} requires a column", self.rule_type),
            });
        }
        Ok(())
    }

    /// Query Builder input for one side of this spec.
    pub fn query_input<'a>(&'a self, locator: &'a TableLocator) -> QueryInput<'a> {
        QueryInput {
            database: locator.database.as_deref(),
            schema: locator.schema.as_deref(),
            table: &locator.table,
            column: locator.effective_column(),
            custom_expression: self.custom_expression.as_deref(),
            filter: locator.filter.as_deref(),
        }
    }
}
