//! Trick adjudication.

use crate::domain::{Card, Suit};

/// Whether `challenger` takes the trick from the provisional `winner`.
///
/// A card beats the winner by following the winner's suit with a strictly
/// higher rank, or by being trump when the winner is not trump. Equal ranks
/// never overtake.
pub fn card_beats(challenger: Card, winner: Card, trump: Suit) -> bool {
    if challenger.suit == winner.suit {
        return challenger.rank > winner.rank;
    }
    challenger.suit == trump && winner.suit != trump
}

/// Index of the winning play within `plays` (in play order), or `None` for
/// an empty trick.
pub fn resolve_trick(plays: &[Card], trump: Suit) -> Option<usize> {
    let (first, rest) = plays.split_first()?;
    let mut best_idx = 0usize;
    let mut best = *first;
    for (offset, &card) in rest.iter().enumerate() {
        if card_beats(card, best, trump) {
            best_idx = offset + 1;
            best = card;
        }
    }
    Some(best_idx)
}
