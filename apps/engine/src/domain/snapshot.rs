//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Phase, Player, PlayerId};
use crate::domain::{Card, Suit};

/// One play in the trick in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickPlay {
    pub player_id: PlayerId,
    pub card: Card,
}

/// Round header; absent while in the lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub round_no: u32,
    pub dealer: usize,
    pub trump: Suit,
    pub first_player: usize,
    pub current_player: usize,
    pub seating: Vec<PlayerId>,
    pub current_trick: Vec<TrickPlay>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: Phase,
    pub players: Vec<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundSnapshot>,
}
