// crosscheck-core/src/application/runner.rs
//
// USE CASE: execute a batch of validation specs, one outcome per enabled
// spec. Strictly sequential: the source side fully completes (including
// handle release) before the target side starts, and one spec's failure
// never aborts the batch.

use tracing::{debug, error, info};

use crate::domain::outcome::{Status, ValidationOutcome};
use crate::domain::spec::{TableLocator, ValidationSpec};
use crate::domain::threshold::evaluate;
use crate::domain::value::{ScalarValue, to_numeric};
use crate::domain::query;
use crate::error::CrosscheckError;
use crate::ports::connector::ConnectionResolver;

/// Aggregated view over one run, for reporting and exit-code policy.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<ValidationOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.count(Status::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(Status::Fail)
    }

    pub fn errors(&self) -> usize {
        self.count(Status::Error)
    }

    /// Any FAIL or ERROR makes the whole run report non-zero.
    pub fn success(&self) -> bool {
        self.failed() == 0 && self.errors() == 0
    }

    fn count(&self, status: Status) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == status)
            .count()
    }
}

/// Runs every enabled spec in order. Disabled specs are excluded from
/// execution and never appear in the report.
pub async fn run_validations(
    resolver: &dyn ConnectionResolver,
    specs: &[ValidationSpec],
) -> RunReport {
    let mut outcomes = Vec::new();

    for spec in specs.iter().filter(|s| s.enabled) {
        outcomes.push(run_one(resolver, spec).await);
    }

    RunReport { outcomes }
}

async fn run_one(resolver: &dyn ConnectionResolver, spec: &ValidationSpec) -> ValidationOutcome {
    info!(id = %spec.id, name = %spec.name, "Validating");
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    match execute_spec(resolver, spec).await {
        Ok(exec) => {
            let source_numeric = to_numeric(exec.source_value.as_ref());
            let target_numeric = to_numeric(exec.target_value.as_ref());

            let difference = match (source_numeric, target_numeric) {
                (Some(s), Some(t)) => Some(t - s),
                _ => None,
            };
            let percentage_diff = match (difference, source_numeric) {
                (Some(d), Some(s)) if s != 0.0 => Some(d / s * 100.0),
                _ => None,
            };

            let verdict = evaluate(
                source_numeric,
                target_numeric,
                spec.threshold_type,
                spec.threshold_value,
            );
            let status = Status::from(verdict);

            info!(
                id = %spec.id,
                %status,
                source = ?exec.source_value,
                target = ?exec.target_value,
                "Validation finished"
            );

            ValidationOutcome {
                id: spec.id.clone(),
                name: spec.name.clone(),
                status,
                source_value: exec.source_value,
                target_value: exec.target_value,
                difference,
                percentage_diff,
                source_details: spec.source.details(),
                target_details: spec.target.details(),
                rule_type: spec.rule_type,
                threshold_type: spec.threshold_type,
                threshold_value: spec.threshold_value,
                source_query: Some(exec.source_query),
                target_query: Some(exec.target_query),
                error_message: None,
                execution_timestamp: timestamp,
            }
        }
        Err(e) => {
            error!(id = %spec.id, error = %e, "Validation errored");

            ValidationOutcome {
                id: spec.id.clone(),
                name: spec.name.clone(),
                status: Status::Error,
                source_value: None,
                target_value: None,
                difference: None,
                percentage_diff: None,
                source_details: spec.source.details(),
                target_details: spec.target.details(),
                rule_type: spec.rule_type,
                threshold_type: spec.threshold_type,
                threshold_value: spec.threshold_value,
                source_query: None,
                target_query: None,
                error_message: Some(e.to_string()),
                execution_timestamp: timestamp,
            }
        }
    }
}

struct SpecExecution {
    source_query: String,
    source_value: Option<ScalarValue>,
    target_query: String,
    target_value: Option<ScalarValue>,
}

async fn execute_spec(
    resolver: &dyn ConnectionResolver,
    spec: &ValidationSpec,
) -> Result<SpecExecution, CrosscheckError> {
    // Source first, released before the target handle is even opened.
    let (source_query, source_value) = run_side(resolver, spec, &spec.source).await?;
    let (target_query, target_value) = run_side(resolver, spec, &spec.target).await?;

    Ok(SpecExecution {
        source_query,
        source_value,
        target_query,
        target_value,
    })
}

/// Opens a handle, builds and executes the query, and guarantees the
/// handle is released on every exit path before returning.
async fn run_side(
    resolver: &dyn ConnectionResolver,
    spec: &ValidationSpec,
    locator: &TableLocator,
) -> Result<(String, Option<ScalarValue>), CrosscheckError> {
    let mut conn = resolver.open(&locator.connection).await?;

    let result = async {
        let sql = query::build_query(conn.dialect(), spec.rule_type, &spec.query_input(locator))?;
        debug!(connection = %locator.connection, %sql, "Executing aggregate query");
        let value = conn.fetch_scalar(&sql).await?;
        Ok::<_, CrosscheckError>((sql, value))
    }
    .await;

    // Release the handle whether the query succeeded or not
    let closed = conn.close().await;

    let (sql, value) = result?;
    closed?;
    Ok((sql, value))
}
