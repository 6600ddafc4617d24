//! `liveroom resolve` — look up the room id for a uniqueId.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use serde_json::json;
use tracing::{info, warn};

use liveroom_config::{LiveroomConfig, DEFAULT_TIMEOUT_SECS};
use liveroom_core::{LiveError, ResolutionError, SessionParams, DEFAULT_BASE_URL};
use liveroom_web::{RoomIdApiRoute, WebClient};

use crate::terminal_output::{note_error, note_success, note_warn};

pub const EXIT_USER_NOT_FOUND: u8 = 2;
pub const EXIT_PARSE_FAILURE: u8 = 3;

/// Wire a web client and the room id route from config.
pub fn build_route(config: &LiveroomConfig) -> (RoomIdApiRoute, Arc<SessionParams>) {
    let web = config.web();
    let params = Arc::new(SessionParams::with_defaults(web.params.clone()));

    let mut client = WebClient::new(params.clone()).with_timeout(Duration::from_secs(
        web.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    ));
    if let Some(ua) = &web.user_agent {
        client = client.with_user_agent(ua.clone());
    }
    for (name, value) in &web.headers {
        client = client.with_header(name.clone(), value.clone());
    }

    let route = RoomIdApiRoute::new(Arc::new(client), params.clone())
        .with_base_url(web.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
    (route, params)
}

pub fn exit_code_for(err: &ResolutionError) -> u8 {
    match err {
        ResolutionError::UserNotFound { .. } => EXIT_USER_NOT_FOUND,
        ResolutionError::ParseFailure(_) => EXIT_PARSE_FAILURE,
    }
}

/// JSON object printed for a failed lookup under `--json`.
pub fn error_json(unique_id: &str, err: &ResolutionError) -> serde_json::Value {
    let kind = match err {
        ResolutionError::UserNotFound { .. } => "user_not_found",
        ResolutionError::ParseFailure(_) => "parse_failure",
    };
    json!({
        "uniqueId": err.unique_id().unwrap_or(unique_id),
        "kind": kind,
        "error": err.to_string(),
    })
}

pub async fn run(config: &LiveroomConfig, unique_id: &str, as_json: bool) -> Result<ExitCode> {
    let unique_id = unique_id.trim().trim_start_matches('@');
    if unique_id.is_empty() {
        bail!("uniqueId cannot be empty");
    }

    let (route, _params) = build_route(config);

    match route.resolve(unique_id).await {
        Ok(room_id) => {
            info!(unique_id, room_id = %room_id, "Resolved room id");
            if as_json {
                println!("{}", json!({ "uniqueId": unique_id, "roomId": room_id }));
            } else {
                note_success(&format!("@{unique_id} is in room {room_id}"));
                println!("{room_id}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(LiveError::Resolution(err)) => {
            warn!(unique_id, error = %err, "Room id resolution failed");
            if as_json {
                println!("{}", error_json(unique_id, &err));
            } else if let ResolutionError::UserNotFound { .. } = err {
                note_warn(&err.to_string());
            } else {
                note_error(&err.to_string());
            }
            Ok(ExitCode::from(exit_code_for(&err)))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveroom_config::{apply_all_defaults, WebConfig};
    use liveroom_core::SessionParameterStore;

    #[test]
    fn build_route_seeds_session_params() {
        let mut web = WebConfig::default();
        web.params.insert("app_language".into(), "de-DE".into());
        let config = apply_all_defaults(LiveroomConfig {
            web: Some(web),
            ..Default::default()
        });

        let (_route, params) = build_route(&config);
        assert_eq!(params.get("app_language").as_deref(), Some("de-DE"));
        assert_eq!(params.get("aid").as_deref(), Some("1988"));
        assert!(params.get("room_id").is_none());
    }

    #[test]
    fn exit_codes_distinguish_failures() {
        let not_found = ResolutionError::UserNotFound {
            unique_id: "x".into(),
            message: String::new(),
        };
        let parse = ResolutionError::ParseFailure(String::new());
        assert_eq!(exit_code_for(&not_found), EXIT_USER_NOT_FOUND);
        assert_eq!(exit_code_for(&parse), EXIT_PARSE_FAILURE);
    }

    #[test]
    fn error_json_reports_kind_and_handle() {
        let not_found = ResolutionError::UserNotFound {
            unique_id: "ghost".into(),
            message: "user_not_found".into(),
        };
        let body = error_json("ghost", &not_found);
        assert_eq!(body["uniqueId"], "ghost");
        assert_eq!(body["kind"], "user_not_found");
        assert!(body["error"].as_str().unwrap().contains("ghost"));

        let parse = ResolutionError::ParseFailure("missing roomId".into());
        let body = error_json("someone", &parse);
        assert_eq!(body["uniqueId"], "someone");
        assert_eq!(body["kind"], "parse_failure");
    }

    #[tokio::test]
    async fn empty_unique_id_is_rejected() {
        let result = run(&LiveroomConfig::default(), " @ ", false).await;
        assert!(result.is_err());
    }
}
