// crosscheck-core/src/infrastructure/adapters/csv.rs
//
// Flat-file adapter: the CSV is loaded through DuckDB's read_csv_auto and
// exposed under the fixed logical name `data`, which is exactly what the
// Query Builder emits for the csv dialect.

use async_trait::async_trait;
use tracing::info;

use crate::domain::dialect::Dialect;
use crate::domain::value::ScalarValue;
use crate::error::CrosscheckError;
use crate::infrastructure::adapters::duckdb::DuckDbConnection;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connection;

#[derive(Debug)]
pub struct CsvConnection {
    inner: DuckDbConnection,
}

impl CsvConnection {
    pub fn open(file_path: &str, delimiter: Option<&str>) -> Result<Self, InfrastructureError> {
        if !std::path::Path::new(file_path).exists() {
            return Err(InfrastructureError::Connection(format!(
                "CSV file not found: {}",
                file_path
            )));
        }

        let inner = DuckDbConnection::open(":memory:")?.with_dialect(Dialect::Csv);

        // Single-quote escaping for the SQL literal
        let escaped_path = file_path.replace('\'', "''");
        let source = match delimiter {
            Some(d) if d != "," => format!(
                "read_csv_auto('{}', delim='{}', header=true)",
                escaped_path,
                d.replace('\'', "''")
            ),
            _ => format!("read_csv_auto('{}')", escaped_path),
        };

        inner
            .execute(&format!(
                "CREATE OR REPLACE VIEW data AS SELECT * FROM {}",
                source
            ))
            .map_err(|e| {
                InfrastructureError::Connection(format!(
                    "Failed to load CSV file {}: {}",
                    file_path, e
                ))
            })?;

        info!(path = file_path, "CSV file registered as 'data'");
        Ok(Self { inner })
    }
}

#[async_trait]
impl Connection for CsvConnection {
    fn dialect(&self) -> Dialect {
        Dialect::Csv
    }

    async fn fetch_scalar(&mut self, sql: &str) -> Result<Option<ScalarValue>, CrosscheckError> {
        self.inner.fetch_scalar(sql).await
    }

    async fn ping(&mut self) -> Result<(), CrosscheckError> {
        self.inner
            .fetch_scalar("SELECT COUNT(*) FROM data")
            .await
            .map(|_| ())
    }

    async fn close(&mut self) -> Result<(), CrosscheckError> {
        self.inner.close().await
    }
}
