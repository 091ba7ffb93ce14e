use serde::{Serialize, Serializer};
use std::fmt;

/// Lifecycle state of a lobby.
///
/// Only `waiting -> started` is driven by this service; any other value
/// written by other collaborators is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyStatus {
    Waiting,
    Started,
    Other(String),
}

impl LobbyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LobbyStatus::Waiting => "waiting",
            LobbyStatus::Started => "started",
            LobbyStatus::Other(s) => s,
        }
    }
}

impl From<String> for LobbyStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "waiting" => LobbyStatus::Waiting,
            "started" => LobbyStatus::Started,
            _ => LobbyStatus::Other(s),
        }
    }
}

impl fmt::Display for LobbyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LobbyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A lobby record as stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    pub code: String,
    pub host_uid: Option<String>,
    pub status: LobbyStatus,
    /// Milliseconds since the Unix epoch, assigned by the store
    pub started_at: Option<i64>,
    pub settings: Option<serde_json::Value>,
}

impl Lobby {
    /// A lobby without a recorded host matches nobody.
    pub fn is_hosted_by(&self, host_id: &str) -> bool {
        self.host_uid.as_deref() == Some(host_id)
    }
}
