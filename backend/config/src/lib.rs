//! `liveroom-config` — runtime configuration management.
//!
//! Provides:
//! - Typed config schema (web client, logging)
//! - YAML loading from the config directory
//! - `${ENV_VAR}` substitution and `LIVEROOM_*` overrides
//! - Config redaction for safe display
//! - Default value application
//! - Validation

pub mod defaults;
pub mod env;
pub mod io;
pub mod redact;
pub mod schema;
pub mod validation;

pub use defaults::{
    apply_all_defaults, DEFAULT_CLIENT_PARAMS, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS,
};
pub use env::{apply_env_overrides, resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config};
pub use redact::{collect_redacted_paths, redact};
pub use schema::{LiveroomConfig, LoggingConfig, WebConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Load, substitute env vars, apply overrides and defaults, and validate.
///
/// This is the main entry point for loading a config at runtime.
pub async fn load_and_prepare(path: &Path) -> Result<LiveroomConfig> {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_and_prepare_with(path, &env).await
}

/// Same as [`load_and_prepare`], reading variables from `env`.
pub async fn load_and_prepare_with(
    path: &Path,
    env: &HashMap<String, String>,
) -> Result<LiveroomConfig> {
    let raw_config = load_config(path).await?;
    prepare(raw_config, env)
}

fn prepare(raw_config: LiveroomConfig, env: &HashMap<String, String>) -> Result<LiveroomConfig> {
    let value: Value =
        serde_json::to_value(&raw_config).context("Failed to serialize config for processing")?;

    let value =
        resolve_env_vars_with(&value, env).context("Failed to resolve env vars in config")?;

    let config: LiveroomConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    let config = apply_env_overrides(config, env)?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if let Some(first) = report.errors.into_iter().next() {
        bail!(first);
    }

    Ok(config)
}
