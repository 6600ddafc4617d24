use std::fmt;

use serde::{Deserialize, Serialize};

/// Default platform origin all web routes are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://www.tiktok.com";

/// Desktop browser user agent the web endpoints expect.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Path of the user-room lookup endpoint, relative to the base URL.
pub const ROOM_ID_API_PATH: &str = "/api-live/user/room/";

/// Source tag the user-room endpoint requires. Fixed by the remote protocol.
pub const SOURCE_TYPE: u32 = 54;

/// Session parameter key the resolved room id is written under.
pub const ROOM_ID_PARAM: &str = "room_id";

/// Opaque identifier of a user's live room.
///
/// Only ever produced from the `data.user.roomId` field of a user-room
/// response; its contents are not inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RoomId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoomId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single user-room lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    unique_id: String,
    source_type: u32,
}

impl ResolutionRequest {
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            source_type: SOURCE_TYPE,
        }
    }

    /// Query parameters for the user-room endpoint, in request order.
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("uniqueId".to_string(), self.unique_id.clone()),
            ("sourceType".to_string(), self.source_type.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_type_is_fixed() {
        for id in ["a", "somecreator", "user.with.dots"] {
            let params = ResolutionRequest::new(id).query_params();
            assert_eq!(params[1], ("sourceType".to_string(), "54".to_string()));
        }
    }

    #[test]
    fn query_params_carry_id_and_source_type() {
        let params = ResolutionRequest::new("somecreator").query_params();
        assert_eq!(
            params,
            vec![
                ("uniqueId".to_string(), "somecreator".to_string()),
                ("sourceType".to_string(), "54".to_string()),
            ]
        );
    }

    #[test]
    fn room_id_serializes_as_plain_string() {
        let id = RoomId::new("7123456789");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7123456789\"");
        assert_eq!(id, "7123456789");
    }
}
