use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Card, Suit};

/// Opaque participant identity bound by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh identity for transports that have none of their own.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A registered participant and their per-round state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub hand: Vec<Card>,
    pub prediction: i32,
    pub tricks_won: u32,
    pub score: i32,
    pub has_predicted: bool,
}

impl Player {
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            hand: Vec::new(),
            prediction: 0,
            tricks_won: 0,
            score: 0,
            has_predicted: false,
        }
    }

    /// Clear per-round state and take a fresh hand. Score is kept.
    pub fn reset_for_round(&mut self, hand: Vec<Card>) {
        self.hand = hand;
        self.prediction = 0;
        self.tricks_won = 0;
        self.has_predicted = false;
    }

    /// Remove one copy of `card` from the hand. Returns false when absent.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Overall session progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Players may join; no hands are dealt.
    Lobby,
    /// A round is dealt; predictions and card plays are accepted.
    InRound,
}

/// Per-round state.
///
/// `seating` is the player order captured at the deal. `dealer`,
/// `first_player` and `current_player` index into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// 1-based round counter.
    pub round_no: u32,
    pub dealer: usize,
    pub trump: Suit,
    pub first_player: usize,
    pub current_player: usize,
    pub seating: Vec<PlayerId>,
    /// Ordered plays for the trick in progress.
    pub current_trick: Vec<(PlayerId, Card)>,
}

impl RoundState {
    /// State for the first round of a fresh game.
    pub fn opening() -> Self {
        Self {
            round_no: 1,
            dealer: 0,
            trump: Suit::Spades,
            first_player: 0,
            current_player: 0,
            seating: Vec::new(),
            current_trick: Vec::new(),
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seating.len()
    }

    pub fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.seating.iter().position(|p| p == id)
    }

    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.seating.get(self.current_player)
    }

    /// One card from every seated player.
    pub fn trick_is_complete(&self) -> bool {
        !self.seating.is_empty()
            && self
                .seating
                .iter()
                .all(|id| self.current_trick.iter().any(|(p, _)| p == id))
    }
}

/// Seat `delta` steps clockwise from `seat` around a table of `seats`.
#[inline]
pub fn seat_offset(seat: usize, delta: usize, seats: usize) -> usize {
    if seats == 0 {
        return 0;
    }
    (seat + delta) % seats
}

/// Next seat clockwise.
#[inline]
pub fn next_seat(seat: usize, seats: usize) -> usize {
    seat_offset(seat, 1, seats)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: usize, seats: usize) -> usize {
    next_seat(dealer, seats)
}

/// Index repair after the seat at `removed` leaves: seats after it shift
/// down by one, and the result wraps into the shrunken table.
#[inline]
pub fn seat_after_removal(seat: usize, removed: usize, seats_after: usize) -> usize {
    if seats_after == 0 {
        return 0;
    }
    let shifted = if seat > removed { seat - 1 } else { seat };
    shifted % seats_after
}
