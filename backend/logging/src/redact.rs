//! Log Redaction Layer
//!
//! Scrubs session cookies, request signatures and bearer tokens from
//! strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

/// `key=value` pairs in query strings and cookie headers that identify a session.
static SESSION_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(sessionid|sessionid_ss|sid_tt|msToken|X-Bogus|_signature|ttwid)=([^&;\s]+)")
        .expect("session param pattern is valid")
});
static BEARER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[a-zA-Z0-9\-\._~+/]+=*").expect("bearer pattern is valid")
});

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = SESSION_PARAM_RE.replace_all(input, "$1=[REDACTED]");
    BEARER_RE
        .replace_all(&redacted, "Bearer [REDACTED_TOKEN]")
        .into_owned()
}
