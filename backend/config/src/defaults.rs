//! Config defaults: applies default values to parsed config.

use liveroom_core::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use crate::schema::{LiveroomConfig, LoggingConfig, WebConfig};

/// Default per-request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Client-wide query parameters the web endpoints expect on every request.
pub const DEFAULT_CLIENT_PARAMS: &[(&str, &str)] = &[
    ("aid", "1988"),
    ("app_language", "en-US"),
    ("app_name", "tiktok_web"),
    ("browser_language", "en-US"),
    ("browser_name", "Mozilla"),
    ("browser_online", "true"),
    ("browser_platform", "Win32"),
    ("cookie_enabled", "true"),
    ("device_platform", "web_pc"),
    ("focus_state", "true"),
    ("from_page", "user"),
    ("is_fullscreen", "false"),
    ("is_page_visible", "true"),
    ("screen_height", "1080"),
    ("screen_width", "1920"),
    ("tz_name", "Etc/UTC"),
    ("webcast_language", "en"),
];

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: LiveroomConfig) -> LiveroomConfig {
    let config = apply_web_defaults(config);
    apply_logging_defaults(config)
}

/// Fill base URL, user agent, timeout, and any client params the user left out.
fn apply_web_defaults(mut config: LiveroomConfig) -> LiveroomConfig {
    let web = config.web.get_or_insert_with(WebConfig::default);
    if web.base_url.is_none() {
        web.base_url = Some(DEFAULT_BASE_URL.to_string());
    }
    if web.user_agent.is_none() {
        web.user_agent = Some(DEFAULT_USER_AGENT.to_string());
    }
    if web.timeout_secs.is_none() {
        web.timeout_secs = Some(DEFAULT_TIMEOUT_SECS);
    }
    for (key, value) in DEFAULT_CLIENT_PARAMS {
        web.params
            .entry((*key).to_string())
            .or_insert_with(|| (*value).to_string());
    }
    config
}

fn apply_logging_defaults(mut config: LiveroomConfig) -> LiveroomConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.json.is_none() {
        logging.json = Some(false);
    }
    config
}
