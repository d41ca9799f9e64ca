// crosscheck-core/src/infrastructure/config/validations.rs
//
// Validation specs from YAML. A malformed entry is logged and skipped so
// one bad spec cannot take down the whole batch; a missing or unreadable
// file aborts the run.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::spec::ValidationSpec;
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Deserialize)]
struct ValidationsFile {
    validations: Vec<serde_yaml::Value>,
}

#[instrument]
pub fn load_validations(path: &Path) -> Result<Vec<ValidationSpec>, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let file: ValidationsFile = serde_yaml::from_str(&content)?;

    // Each entry is deserialised on its own so one malformed spec is
    // skipped instead of rejecting the file.
    let mut specs = Vec::with_capacity(file.validations.len());
    for (index, raw) in file.validations.into_iter().enumerate() {
        let spec: ValidationSpec = match serde_yaml::from_value(raw) {
            Ok(spec) => spec,
            Err(e) => {
                warn!(entry = index + 1, error = %e, "Skipping malformed validation entry");
                continue;
            }
        };

        if let Err(e) = spec.validate() {
            warn!(id = %spec.id, error = %e, "Skipping invalid validation spec");
            continue;
        }
        if let Err(e) = spec.check() {
            warn!(id = %spec.id, error = %e, "Skipping invalid validation spec");
            continue;
        }

        specs.push(spec);
    }

    if specs.is_empty() {
        return Err(InfrastructureError::ConfigError(format!(
            "No usable validation specs in {}",
            path.display()
        )));
    }

    info!(count = specs.len(), "Validation specs loaded");
    Ok(specs)
}
