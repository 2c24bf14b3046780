use proptest::prelude::*;

use crate::domain::tricks::resolve_trick;
use crate::domain::{test_gens, test_prelude};
use crate::domain::{Card, Suit};

/// Independent oracle: highest trump if any trump was played, otherwise the
/// highest card of the first card's suit.
fn oracle_winner(plays: &[Card], trump: Suit) -> usize {
    let lead = plays[0].suit;
    let key = |c: &Card| ((c.suit == trump) as u8, (c.suit == lead) as u8, c.rank);
    plays
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| key(a).cmp(&key(b)))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The resolver agrees with the oracle on every distinct-card trick.
    #[test]
    fn prop_winner_matches_oracle(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let winner = resolve_trick(&plays, trump);
        prop_assert_eq!(winner, Some(oracle_winner(&plays, trump)),
            "trump={:?} plays={:?}", trump, plays);
    }

    /// Resolution is a pure function of its inputs.
    #[test]
    fn prop_resolution_is_deterministic(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        prop_assert_eq!(resolve_trick(&plays, trump), resolve_trick(&plays, trump));
    }

    /// When trump is played, a trump wins; otherwise the winner follows the lead.
    #[test]
    fn prop_winner_suit(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let idx = resolve_trick(&plays, trump).unwrap();
        let winner = plays[idx];
        if plays.iter().any(|c| c.suit == trump) {
            prop_assert_eq!(winner.suit, trump);
        } else {
            prop_assert_eq!(winner.suit, plays[0].suit);
        }
    }
}
