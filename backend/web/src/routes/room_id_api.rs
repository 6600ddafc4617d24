//! Resolves a user's uniqueId to the room id of their live session via the
//! platform's `api-live/user/room` endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use liveroom_core::{
    DEFAULT_BASE_URL, HttpClient, LiveError, ROOM_ID_API_PATH, ROOM_ID_PARAM, ResolutionError,
    ResolutionRequest, RoomId, SessionParameterStore,
};

use super::ClientRoute;

/// `message` value the endpoint returns for handles without a live account.
const USER_NOT_FOUND: &str = "user_not_found";

const PARSE_FAILURE_MESSAGE: &str = "That user can't stream, or you might be blocked by TikTok.";

/// Room id lookup through the user-room API.
///
/// A successful [`resolve`](Self::resolve) writes the room id to the session
/// store under `room_id`. Concurrent resolutions on one store race on that
/// key and the last write wins; serialize calls if ordering matters.
pub struct RoomIdApiRoute {
    web: Arc<dyn HttpClient>,
    params: Arc<dyn SessionParameterStore>,
    base_url: String,
}

impl RoomIdApiRoute {
    pub fn new(web: Arc<dyn HttpClient>, params: Arc<dyn SessionParameterStore>) -> Self {
        Self {
            web,
            params,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Resolve `unique_id` to its room id and store it in the session.
    ///
    /// Transport failures from the HTTP client, including timeouts, are
    /// returned as-is. Dropping the future cancels the request and leaves the
    /// session untouched.
    pub async fn resolve(&self, unique_id: &str) -> Result<RoomId, LiveError> {
        let room_data =
            Self::fetch_user_room_data(self.web.as_ref(), &self.base_url, unique_id).await?;

        let room_id = Self::parse_room_id(&room_data)?;
        self.params.set(ROOM_ID_PARAM, room_id.as_str().to_string());
        Ok(room_id)
    }

    /// Fetch the raw user-room payload for `unique_id`.
    ///
    /// Fails with [`ResolutionError::UserNotFound`] when the platform reports
    /// the handle has no live-capable account; otherwise the body is returned
    /// unchanged.
    pub async fn fetch_user_room_data(
        web: &dyn HttpClient,
        base_url: &str,
        unique_id: &str,
    ) -> Result<Value, LiveError> {
        let request = ResolutionRequest::new(unique_id);
        let url = format!("{}{}", base_url.trim_end_matches('/'), ROOM_ID_API_PATH);

        let response = web.get_response(&url, &request.query_params()).await?;
        let body = response.json()?;

        if body.get("message").and_then(Value::as_str) == Some(USER_NOT_FOUND) {
            return Err(ResolutionError::UserNotFound {
                unique_id: unique_id.to_string(),
                message: format!(
                    "The requested user '{unique_id}' is not capable of going LIVE on TikTok, \
                     or has never gone live on TikTok, or does not exist."
                ),
            }
            .into());
        }

        Ok(body)
    }

    /// Extract `data.user.roomId` from a user-room payload.
    pub fn parse_room_id(data: &Value) -> Result<RoomId, ResolutionError> {
        match data.pointer("/data/user/roomId") {
            Some(Value::String(id)) => Ok(RoomId::new(id.clone())),
            Some(Value::Number(id)) => Ok(RoomId::new(id.to_string())),
            _ => Err(ResolutionError::ParseFailure(PARSE_FAILURE_MESSAGE.to_string())),
        }
    }
}

#[async_trait]
impl ClientRoute for RoomIdApiRoute {
    type Args = String;
    type Output = RoomId;

    fn name(&self) -> &str {
        "room_id_api"
    }

    async fn call(&self, unique_id: String) -> Result<RoomId, LiveError> {
        self.resolve(&unique_id).await
    }
}
