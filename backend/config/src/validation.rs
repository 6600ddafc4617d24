//! Config validation with user-friendly error messages.

use crate::schema::LiveroomConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &LiveroomConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_web(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_web(config: &LiveroomConfig, report: &mut ValidationReport) {
    let Some(web) = &config.web else { return };

    if let Some(base_url) = &web.base_url {
        match url::Url::parse(base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                if parsed.scheme() == "http" {
                    report.warn(
                        "web.baseUrl",
                        "Plain-HTTP base URL; session cookies travel unencrypted",
                    );
                }
            }
            Ok(parsed) => report.error(
                "web.baseUrl",
                format!("Unsupported scheme '{}'; use http or https", parsed.scheme()),
            ),
            Err(e) => report.error("web.baseUrl", format!("Invalid URL: {e}")),
        }
    }

    if web.timeout_secs == Some(0) {
        report.error("web.timeoutSecs", "timeoutSecs must be >= 1");
    }

    if web.user_agent.as_deref().is_some_and(|ua| ua.trim().is_empty()) {
        report.error("web.userAgent", "userAgent cannot be empty");
    }

    for key in web.params.keys() {
        if key.trim().is_empty() {
            report.error("web.params", "Parameter names cannot be empty");
        }
    }
    if web.params.contains_key("uniqueId") || web.params.contains_key("sourceType") {
        report.warn(
            "web.params",
            "uniqueId/sourceType are set per request and will be overridden",
        );
    }
}

fn validate_logging(config: &LiveroomConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        if !matches!(
            level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            report.warn(
                "logging.level",
                format!(
                    "'{level}' is not a plain level; it will be parsed as an EnvFilter directive"
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::WebConfig;

    fn with_web(web: WebConfig) -> LiveroomConfig {
        LiveroomConfig {
            web: Some(web),
            ..Default::default()
        }
    }

    #[test]
    fn empty_config_is_valid() {
        let report = validate(&LiveroomConfig::default());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let report = validate(&with_web(WebConfig {
            base_url: Some("ftp://example.test".into()),
            ..Default::default()
        }));
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "web.baseUrl");
    }

    #[test]
    fn zero_timeout_is_error() {
        let report = validate(&with_web(WebConfig {
            timeout_secs: Some(0),
            ..Default::default()
        }));
        assert!(report.errors.iter().any(|e| e.path == "web.timeoutSecs"));
    }

    #[test]
    fn plain_http_is_only_a_warning() {
        let report = validate(&with_web(WebConfig {
            base_url: Some("http://127.0.0.1:8080".into()),
            ..Default::default()
        }));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
