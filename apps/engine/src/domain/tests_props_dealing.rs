use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::dealing::{deal_hands, DECK_SIZE};
use crate::domain::rules::HAND_SIZE;
use crate::domain::{test_gens, test_prelude};
use crate::domain::{full_deck, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Hands plus remainder always form the full deck exactly once.
    #[test]
    fn prop_deal_partitions_the_deck(
        seed in test_gens::seed(),
        players in 2usize..=4,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let dealt = deal_hands(players, HAND_SIZE, &mut rng).unwrap();

        prop_assert_eq!(dealt.hands.len(), players);
        prop_assert!(dealt.hands.iter().all(|h| h.len() == HAND_SIZE));

        let all: Vec<Card> = dealt
            .hands
            .iter()
            .flatten()
            .chain(dealt.remainder.iter())
            .copied()
            .collect();
        prop_assert_eq!(all.len(), DECK_SIZE);
        let unique: HashSet<Card> = all.iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        let canonical: HashSet<Card> = full_deck().into_iter().collect();
        prop_assert_eq!(unique, canonical);
    }

    /// Asking for more than 52 cards always fails.
    #[test]
    fn prop_oversized_deal_fails(
        seed in test_gens::seed(),
        players in 5usize..=12,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        prop_assert!(deal_hands(players, HAND_SIZE, &mut rng).is_err());
    }
}
