// crosscheck-core/src/infrastructure/config/connections.rs
//
// Connection profiles from YAML, with ${VAR} environment interpolation so
// credentials never have to live in the file itself.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, instrument, warn};

use crate::infrastructure::error::InfrastructureError;

/// One entry under the top-level `connections:` map.
#[derive(Debug, Deserialize, Clone)]
pub struct ConnectionProfile {
    /// sqlserver | oracle | netezza | snowflake | duckdb | csv
    #[serde(rename = "type")]
    pub connector_type: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// File path, for the duckdb and csv connector types
    pub path: Option<String>,
    pub delimiter: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConnectionsFile {
    connections: HashMap<String, ConnectionProfile>,
}

/// Loads the connections YAML. A `.env` file next to the process, if any,
/// is loaded first so that ${VAR} references can resolve from it.
#[instrument]
pub fn load_connections(
    path: &Path,
) -> Result<HashMap<String, ConnectionProfile>, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }

    // Best-effort: absence of a .env file is not an error
    let _ = dotenvy::dotenv();

    let content = fs::read_to_string(path)?;
    let content = resolve_env_vars(&content);

    let file: ConnectionsFile = serde_yaml::from_str(&content)?;
    if file.connections.is_empty() {
        return Err(InfrastructureError::ConfigError(format!(
            "No connections defined in {}",
            path.display()
        )));
    }

    info!(count = file.connections.len(), "Connection profiles loaded");
    Ok(file.connections)
}

/// Replaces every `${VAR}` occurrence with the environment value.
/// Unset variables resolve to an empty string with a warning.
fn resolve_env_vars(content: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    let re = PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid literal regex"));

    re.replace_all(content, |caps: &regex::Captures<'_>| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                warn!(variable = var_name, "Environment variable not set, using empty string");
                String::new()
            }
        }
    })
    .into_owned()
}
