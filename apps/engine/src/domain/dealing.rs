//! Deck construction, shuffling and dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub const DECK_SIZE: usize = 52;

/// Hands cut from a deck plus the undealt remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealt {
    pub hands: Vec<Vec<Card>>,
    pub remainder: Vec<Card>,
}

/// Full 52-card deck in canonical order: all ranks of Spades, then Diamonds,
/// Clubs, Hearts.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Cut `player_count` contiguous hands of `hand_size` cards off the front of
/// `deck`, keeping shuffled order. Leftover cards are returned as the remainder.
pub fn deal(deck: Vec<Card>, player_count: usize, hand_size: usize) -> Result<Dealt, DomainError> {
    let requested = player_count.saturating_mul(hand_size);
    if requested > deck.len() {
        return Err(DomainError::insufficient_cards(requested, deck.len()));
    }

    let mut rest = deck;
    let remainder = rest.split_off(requested);
    let hands = if hand_size == 0 {
        vec![Vec::new(); player_count]
    } else {
        rest.chunks(hand_size).map(<[Card]>::to_vec).collect()
    };

    Ok(Dealt { hands, remainder })
}

/// Shuffle a fresh deck with `rng` and deal it.
pub fn deal_hands<R: Rng + ?Sized>(
    player_count: usize,
    hand_size: usize,
    rng: &mut R,
) -> Result<Dealt, DomainError> {
    // Reject before touching the RNG so a failed deal leaves no trace.
    let requested = player_count.saturating_mul(hand_size);
    if requested > DECK_SIZE {
        return Err(DomainError::insufficient_cards(requested, DECK_SIZE));
    }

    let mut deck = full_deck();
    shuffle(&mut deck, rng);
    deal(deck, player_count, hand_size)
}
