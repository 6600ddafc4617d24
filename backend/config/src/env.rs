//! Environment handling for config values.
//!
//! * `${VAR_NAME}` references in string values are substituted at load time.
//!   Only uppercase `[A-Z_][A-Z0-9_]*` names match; `$${VAR}` yields a
//!   literal `${VAR}`.
//! * `LIVEROOM_*` variables override individual fields after substitution.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;

use crate::schema::{LiveroomConfig, WebConfig};

pub const ENV_BASE_URL: &str = "LIVEROOM_BASE_URL";
pub const ENV_USER_AGENT: &str = "LIVEROOM_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "LIVEROOM_TIMEOUT_SECS";
pub const ENV_SESSION_ID: &str = "LIVEROOM_SESSION_ID";

/// Matches `${VAR}` and the escaped form `$${VAR}`.
static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\$)?\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Error returned for missing env vars.
#[derive(Debug, thiserror::Error)]
#[error("Missing env var \"{var_name}\" referenced at config path: {config_path}")]
pub struct MissingEnvVarError {
    pub var_name: String,
    pub config_path: String,
}

/// Substitute `${VAR}` references using the process environment.
pub fn resolve_env_vars(value: &Value) -> Result<Value> {
    resolve_env_vars_with(value, &std::env::vars().collect())
}

/// Substitute `${VAR}` references using `env` (useful for testing).
pub fn resolve_env_vars_with(value: &Value, env: &HashMap<String, String>) -> Result<Value> {
    Ok(substitute_value(value, env, "")?)
}

fn substitute_value(
    value: &Value,
    env: &HashMap<String, String>,
    path: &str,
) -> Result<Value, MissingEnvVarError> {
    match value {
        Value::String(s) => substitute_string(s, env, path).map(Value::String),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| substitute_value(v, env, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                let child_path = if path.is_empty() {
                    k.clone()
                } else {
                    format!("{path}.{k}")
                };
                result.insert(k.clone(), substitute_value(v, env, &child_path)?);
            }
            Ok(Value::Object(result))
        }
        other => Ok(other.clone()),
    }
}

fn substitute_string(
    s: &str,
    env: &HashMap<String, String>,
    path: &str,
) -> Result<String, MissingEnvVarError> {
    if !s.contains('$') {
        return Ok(s.to_string());
    }

    let mut missing = None;
    let substituted = ENV_VAR_PATTERN.replace_all(s, |caps: &Captures| {
        let name = &caps[2];
        if caps.get(1).is_some() {
            return format!("${{{name}}}");
        }
        match env.get(name) {
            Some(val) if !val.is_empty() => val.clone(),
            _ => {
                missing.get_or_insert_with(|| MissingEnvVarError {
                    var_name: name.to_string(),
                    config_path: path.to_string(),
                });
                String::new()
            }
        }
    });

    match missing {
        Some(err) => Err(err),
        None => Ok(substituted.into_owned()),
    }
}

/// Apply `LIVEROOM_*` overrides from `env` on top of `config`.
pub fn apply_env_overrides(
    mut config: LiveroomConfig,
    env: &HashMap<String, String>,
) -> Result<LiveroomConfig> {
    let web = config.web.get_or_insert_with(WebConfig::default);

    if let Some(url) = env.get(ENV_BASE_URL) {
        web.base_url = Some(url.clone());
    }
    if let Some(ua) = env.get(ENV_USER_AGENT) {
        web.user_agent = Some(ua.clone());
    }
    if let Some(secs) = env.get(ENV_TIMEOUT_SECS) {
        let secs = secs
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds"))?;
        web.timeout_secs = Some(secs);
    }
    if let Some(session_id) = env.get(ENV_SESSION_ID) {
        web.headers
            .insert("Cookie".to_string(), format!("sessionid={session_id}"));
    }

    Ok(config)
}
