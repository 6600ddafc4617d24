//! Structured logging for liveroom.
//!
//! Console and rolling NDJSON output, plus redaction of session secrets
//! before request URLs and headers reach the log.

pub mod logger;
pub mod redact;

pub use logger::{LoggerGuard, init_logger};
pub use redact::redact_sensitive_data;
