//! Domain-level error type used by the deck, resolver and session controller.
//!
//! This error type is transport-agnostic. Callers at the process boundary
//! convert it into `crate::error::AppError` through the provided `From` impl.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::PlayerId;
use crate::domain::Card;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The deck cannot supply `requested` cards.
    InsufficientCards { requested: usize, available: usize },
    /// The player tried to play a card they do not hold.
    CardNotInHand { player: PlayerId, card: Card },
    /// The player already has a card in the trick in progress.
    AlreadyPlayedToTrick(PlayerId),
    /// The identity is not in the player registry.
    UnknownPlayer(PlayerId),
    /// A card was played while no round is dealt.
    NoRoundInProgress,
    /// A card token could not be parsed.
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InsufficientCards {
                requested,
                available,
            } => write!(
                f,
                "insufficient cards: requested {requested}, deck holds {available}"
            ),
            DomainError::CardNotInHand { player, card } => {
                write!(f, "card {card} not in hand of player {player}")
            }
            DomainError::AlreadyPlayedToTrick(player) => {
                write!(f, "player {player} already played to this trick")
            }
            DomainError::UnknownPlayer(player) => write!(f, "unknown player: {player}"),
            DomainError::NoRoundInProgress => write!(f, "no round in progress"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn insufficient_cards(requested: usize, available: usize) -> Self {
        Self::InsufficientCards {
            requested,
            available,
        }
    }

    pub fn card_not_in_hand(player: &PlayerId, card: Card) -> Self {
        Self::CardNotInHand {
            player: player.clone(),
            card,
        }
    }

    pub fn parse_card(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }

    /// Stable SCREAMING_SNAKE_CASE code, used in error messages sent back to callers.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InsufficientCards { .. } => "INSUFFICIENT_CARDS",
            DomainError::CardNotInHand { .. } => "CARD_NOT_IN_HAND",
            DomainError::AlreadyPlayedToTrick(_) => "ALREADY_PLAYED_TO_TRICK",
            DomainError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            DomainError::NoRoundInProgress => "NO_ROUND_IN_PROGRESS",
            DomainError::ParseCard(_) => "PARSE_CARD",
        }
    }
}
