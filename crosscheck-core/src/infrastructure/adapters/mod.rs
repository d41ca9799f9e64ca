// crosscheck-core/src/infrastructure/adapters/mod.rs

pub mod csv;
pub mod duckdb;

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use crate::error::CrosscheckError;
use crate::infrastructure::config::connections::ConnectionProfile;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::{Connection, ConnectionResolver};

pub use csv::CsvConnection;
pub use duckdb::DuckDbConnection;

/// Vendor types the configuration format recognises but for which no
/// driver ships in this build. They still participate in query building
/// (their dialects are part of the vocabulary), they just cannot be
/// opened from here.
const DRIVERLESS_TYPES: &[&str] = &["sqlserver", "mssql", "oracle", "netezza", "nz", "snowflake"];

/// Opens a fresh, single-use connection per request from the profiles of
/// the connections file. No pooling: the runner's lifecycle contract is
/// one handle per query, released immediately after.
pub struct ProfileResolver {
    profiles: HashMap<String, ConnectionProfile>,
}

impl ProfileResolver {
    pub fn new(profiles: HashMap<String, ConnectionProfile>) -> Self {
        Self { profiles }
    }

    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl ConnectionResolver for ProfileResolver {
    async fn open(&self, name: &str) -> Result<Box<dyn Connection>, CrosscheckError> {
        let profile = self.profiles.get(name).ok_or_else(|| {
            InfrastructureError::ConfigError(format!(
                "Connection '{}' not found in configuration. Available: {:?}",
                name,
                self.profile_names()
            ))
        })?;

        let connector_type = profile.connector_type.to_lowercase();
        debug!(connection = name, kind = %connector_type, "Opening connection");

        match connector_type.as_str() {
            "duckdb" => {
                let path = profile.path.as_deref().unwrap_or(":memory:");
                Ok(Box::new(DuckDbConnection::open(path)?))
            }
            "csv" => {
                let path = profile.path.as_deref().ok_or_else(|| {
                    InfrastructureError::ConfigError(format!(
                        "Connection '{}': csv type requires a 'path'",
                        name
                    ))
                })?;
                Ok(Box::new(CsvConnection::open(
                    path,
                    profile.delimiter.as_deref(),
                )?))
            }
            t if DRIVERLESS_TYPES.contains(&t) => Err(InfrastructureError::Connection(format!(
                "Connection '{}': no {} driver is built into this distribution",
                name, t
            ))
            .into()),
            other => Err(InfrastructureError::ConfigError(format!(
                "Connection '{}': unknown connector type '{}'",
                name, other
            ))
            .into()),
        }
    }
}
