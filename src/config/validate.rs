// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{Result, RunrelayError};

/// Semantic validation of a deserialized config.
///
/// Checks:
/// - `runtime.program` must be non-empty.
/// - `runtime.args` entries must be non-empty.
pub fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.runtime.program.trim().is_empty() {
        return Err(RunrelayError::ConfigError(
            "runtime.program must not be empty".to_string(),
        ));
    }

    if config.runtime.args.iter().any(|a| a.is_empty()) {
        return Err(RunrelayError::ConfigError(
            "runtime.args must not contain empty strings".to_string(),
        ));
    }

    Ok(())
}
