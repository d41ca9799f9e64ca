// crosscheck-core/src/ports/connector.rs

// This file defines what your application needs, without knowing how it's done.
// A data store is reduced to the minimal capability set the runner consumes:
// a dialect identifier, a scalar query, a health check and a scoped release.

use crate::domain::dialect::Dialect;
use crate::domain::value::ScalarValue;
use crate::error::CrosscheckError;
use async_trait::async_trait;

/// A live, single-use handle to one data store.
///
/// Lifecycle contract: opened by a [`ConnectionResolver`], used for the
/// queries of one side of one validation, then released with `close()` on
/// every exit path. Handles are never reused between validations.
#[async_trait]
pub trait Connection: Send + std::fmt::Debug {
    /// Which table-reference style this store requires.
    fn dialect(&self) -> Dialect;

    /// Executes SQL text and returns the first column of the first row,
    /// or None if the query yields no row.
    async fn fetch_scalar(&mut self, sql: &str) -> Result<Option<ScalarValue>, CrosscheckError>;

    /// Cheap liveness probe, used by connection testing.
    async fn ping(&mut self) -> Result<(), CrosscheckError>;

    /// Releases the underlying resource. Idempotent.
    async fn close(&mut self) -> Result<(), CrosscheckError>;
}

/// Resolves a connection profile name to a freshly opened handle.
#[async_trait]
pub trait ConnectionResolver: Send + Sync {
    async fn open(&self, name: &str) -> Result<Box<dyn Connection>, CrosscheckError>;
}
