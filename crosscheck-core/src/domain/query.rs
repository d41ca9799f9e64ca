// crosscheck-core/src/domain/query.rs
//
// Pure SQL text generation for aggregate validations. No I/O, no state:
// (dialect, rule, table coordinates, filter) in, SQL string out.

use crate::domain::dialect::Dialect;
use crate::domain::error::DomainError;
use crate::domain::rule::RuleType;

/// Everything the builder needs to emit one aggregate query.
#[derive(Debug, Clone, Default)]
pub struct QueryInput<'a> {
    pub database: Option<&'a str>,
    pub schema: Option<&'a str>,
    pub table: &'a str,
    pub column: Option<&'a str>,
    pub custom_expression: Option<&'a str>,
    pub filter: Option<&'a str>,
}

/// Builds `SELECT <aggregate> FROM <table_ref> [WHERE <filter>]`.
///
/// The filter is emitted verbatim: it is operator-authored configuration,
/// not untrusted input.
pub fn build_query(
    dialect: Dialect,
    rule_type: RuleType,
    input: &QueryInput<'_>,
) -> Result<String, DomainError> {
    let aggregate = aggregate_expression(rule_type, input)?;
    let table_ref = table_reference(dialect, input.database, input.schema, input.table);

    let mut query = format!("SELECT {} FROM {}", aggregate, table_ref);

    if let Some(filter) = input.filter {
        let trimmed = filter.trim();
        if !trimmed.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(trimmed);
        }
    }

    Ok(query)
}

fn aggregate_expression(
    rule_type: RuleType,
    input: &QueryInput<'_>,
) -> Result<String, DomainError> {
    if rule_type == RuleType::Custom {
        return match input.custom_expression.map(str::trim) {
            Some(expr) if !expr.is_empty() => Ok(expr.to_string()),
            _ => Err(DomainError::InvalidRuleType(
                "Custom expression required for CUSTOM rule type".into(),
            )),
        };
    }

    let column = if rule_type.requires_column() {
        match input.column.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => c,
            None => {
                return Err(DomainError::InvalidRuleType(format!(
                    "Column name required for rule type: {}",
                    rule_type
                )));
            }
        }
    } else {
        ""
    };

    let expr = match rule_type {
        RuleType::CountStar => "COUNT(*)".to_string(),
        RuleType::CountColumn => format!("COUNT({})", column),
        RuleType::Sum => format!("SUM({})", column),
        RuleType::Avg => format!("AVG({})", column),
        RuleType::Min => format!("MIN({})", column),
        RuleType::Max => format!("MAX({})", column),
        RuleType::CountDistinct => format!("COUNT(DISTINCT {})", column),
        RuleType::CountNull => format!("SUM(CASE WHEN {} IS NULL THEN 1 ELSE 0 END)", column),
        RuleType::CountNotNull => {
            format!("SUM(CASE WHEN {} IS NOT NULL THEN 1 ELSE 0 END)", column)
        }
        RuleType::Custom => unreachable!("handled above"),
    };

    Ok(expr)
}

/// Qualifies the table name according to the dialect's conventions.
fn table_reference(
    dialect: Dialect,
    database: Option<&str>,
    schema: Option<&str>,
    table: &str,
) -> String {
    match dialect {
        Dialect::SqlServer => {
            // [database].[schema].[table], each part bracket-quoted if present
            let mut parts = Vec::with_capacity(3);
            if let Some(db) = database {
                parts.push(format!("[{}]", db));
            }
            if let Some(sc) = schema {
                parts.push(format!("[{}]", sc));
            }
            parts.push(format!("[{}]", table));
            parts.join(".")
        }
        Dialect::Oracle => {
            // Oracle: the database is part of the connection, not the reference
            match schema {
                Some(sc) => format!("{}.{}", sc, table),
                None => table.to_string(),
            }
        }
        Dialect::Netezza | Dialect::Snowflake => match (database, schema) {
            (Some(db), Some(sc)) => format!("{}.{}.{}", db, sc, table),
            (None, Some(sc)) => format!("{}.{}", sc, table),
            _ => table.to_string(),
        },
        // Flat files are registered in memory under a fixed logical name;
        // the configured table name is irrelevant here.
        Dialect::Csv => "data".to_string(),
        Dialect::Generic => match schema {
            Some(sc) => format!("{}.{}", sc, table),
            None => table.to_string(),
        },
    }
}
