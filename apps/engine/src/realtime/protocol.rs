use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;
use crate::domain::{Card, Notification};
use crate::error::AppError;

/// Inbound events. `disconnect` is raised by the transport on session
/// teardown, never by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMsg {
    #[serde(rename_all = "camelCase")]
    Join {
        player_id: PlayerId,
        username: String,
    },
    StartGame,
    #[serde(rename_all = "camelCase")]
    MakePrediction {
        player_id: PlayerId,
        prediction: i32,
    },
    #[serde(rename_all = "camelCase")]
    PlayCard { player_id: PlayerId, card: Card },
    #[serde(rename_all = "camelCase")]
    Disconnect { player_id: PlayerId },
}

impl ClientMsg {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::protocol("Malformed client message", e))
    }
}

/// Failure report sent back to the initiator of an event only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "error")]
pub struct ErrorMsg {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorMsg {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Everything the engine writes to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerMsg {
    Notification(Notification),
    Error(ErrorMsg),
}

impl ServerMsg {
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::protocol("Failed to serialize server message", e))
    }
}

impl From<Notification> for ServerMsg {
    fn from(n: Notification) -> Self {
        Self::Notification(n)
    }
}
