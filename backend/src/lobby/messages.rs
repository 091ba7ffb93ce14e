use super::model::Lobby;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub lobby_code: Option<String>,
    pub host_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub lobby_code: Option<String>,
    pub host_id: Option<String>,
    /// `null` deserializes to `None` and is treated as missing
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyQuery {
    pub lobby_code: Option<String>,
}

/// `{"success": true}`
#[derive(Debug, Serialize)]
pub struct Ack {
    success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct LobbyResponse {
    success: bool,
    lobby: Lobby,
}

impl LobbyResponse {
    pub fn new(lobby: Lobby) -> Self {
        Self {
            success: true,
            lobby,
        }
    }
}

/// `{"success": false, "error": "..."}`
#[derive(Debug, Serialize)]
pub struct Failure {
    success: bool,
    error: String,
}

impl Failure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
