//! Outbound notifications produced by session transitions.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Player, PlayerId};
use crate::domain::{Card, Suit};

/// Events broadcast to every participant, in the order a transition emits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notification {
    /// The registry changed, or every seated player has predicted.
    UpdatePlayers { players: Vec<Player> },

    /// A round was dealt. Carries every hand, opponents' included.
    #[serde(rename_all = "camelCase")]
    Deal {
        players: Vec<Player>,
        current_trump: Suit,
    },

    #[serde(rename_all = "camelCase")]
    CardPlayed { player_id: PlayerId, card: Card },

    #[serde(rename_all = "camelCase")]
    TrickWon { player_id: PlayerId },

    /// Turn passed to this player.
    #[serde(rename_all = "camelCase")]
    NextPlayer { player_id: PlayerId },
}

impl Notification {
    /// Wire name of the notification.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::UpdatePlayers { .. } => "updatePlayers",
            Notification::Deal { .. } => "deal",
            Notification::CardPlayed { .. } => "cardPlayed",
            Notification::TrickWon { .. } => "trickWon",
            Notification::NextPlayer { .. } => "nextPlayer",
        }
    }
}
