// crosscheck-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::Config;
use duckdb::types::Value;

// Imports Hexagonaux
use crate::domain::dialect::Dialect;
use crate::domain::value::ScalarValue;
use crate::error::CrosscheckError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connection;

/// Embedded DuckDB store (file or in-memory). Also the engine behind the
/// CSV adapter, which only changes the dialect and registers a view.
#[derive(Debug)]
pub struct DuckDbConnection {
    conn: Option<duckdb::Connection>,
    dialect: Dialect,
}

impl DuckDbConnection {
    pub fn open(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();
        let conn = if db_path == ":memory:" {
            duckdb::Connection::open_in_memory_with_flags(config)?
        } else {
            duckdb::Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Some(conn),
            dialect: Dialect::Generic,
        })
    }

    pub(crate) fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub(crate) fn execute(&self, sql: &str) -> Result<(), InfrastructureError> {
        self.inner()?.execute_batch(sql)?;
        Ok(())
    }

    fn inner(&self) -> Result<&duckdb::Connection, InfrastructureError> {
        self.conn
            .as_ref()
            .ok_or_else(|| InfrastructureError::Connection("Connection already closed".into()))
    }
}

#[async_trait]
impl Connection for DuckDbConnection {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn fetch_scalar(&mut self, sql: &str) -> Result<Option<ScalarValue>, CrosscheckError> {
        let conn = self.inner()?;

        let fetch = || -> Result<Option<Value>, duckdb::Error> {
            let mut stmt = conn.prepare(sql)?;
            let mut rows = stmt.query([])?;
            match rows.next()? {
                Some(row) => Ok(Some(row.get::<_, Value>(0)?)),
                None => Ok(None),
            }
        };

        let value = fetch().map_err(|e| {
            InfrastructureError::QueryExecution(format!("{} (query: {})", e, sql))
        })?;

        Ok(value.and_then(value_to_scalar))
    }

    async fn ping(&mut self) -> Result<(), CrosscheckError> {
        self.fetch_scalar("SELECT 1").await.map(|_| ())
    }

    async fn close(&mut self) -> Result<(), CrosscheckError> {
        // Dropping the handle closes the database
        self.conn.take();
        Ok(())
    }
}

/// DuckDB result -> driver-independent scalar. SQL NULL becomes None;
/// exotic types degrade to their text rendering, which the numeric
/// coercion then treats as null if unparseable.
fn value_to_scalar(value: Value) -> Option<ScalarValue> {
    match value {
        Value::Null => None,
        Value::Boolean(b) => Some(ScalarValue::Bool(b)),
        Value::TinyInt(i) => Some(ScalarValue::Int(i64::from(i))),
        Value::SmallInt(i) => Some(ScalarValue::Int(i64::from(i))),
        Value::Int(i) => Some(ScalarValue::Int(i64::from(i))),
        Value::BigInt(i) => Some(ScalarValue::Int(i)),
        Value::HugeInt(i) => Some(ScalarValue::Float(i as f64)),
        Value::UTinyInt(i) => Some(ScalarValue::Int(i64::from(i))),
        Value::USmallInt(i) => Some(ScalarValue::Int(i64::from(i))),
        Value::UInt(i) => Some(ScalarValue::Int(i64::from(i))),
        Value::UBigInt(i) => Some(ScalarValue::Float(i as f64)),
        Value::Float(f) => Some(ScalarValue::Float(f64::from(f))),
        Value::Double(f) => Some(ScalarValue::Float(f)),
        Value::Decimal(d) => Some(ScalarValue::Text(d.to_string())),
        Value::Text(s) => Some(ScalarValue::Text(s)),
        other => Some(ScalarValue::Text(format!("{:?}", other))),
    }
}
