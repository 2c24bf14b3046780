// Proptest generators for domain types.
// Tricks are drawn from a shuffled deck so cards never repeat.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::{Card, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Hearts),
    ]
}

/// Generate `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// A completed trick for 2..=4 players: distinct cards in play order.
pub fn complete_trick() -> impl Strategy<Value = Vec<Card>> {
    (2usize..=4).prop_flat_map(unique_cards)
}

/// A seed for the session RNG.
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
