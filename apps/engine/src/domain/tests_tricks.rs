use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::tricks::{card_beats, resolve_trick};
use crate::domain::{Card, Rank, Suit};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

#[test]
fn higher_same_suit_wins() {
    assert_eq!(resolve_trick(&cards(&["2D", "AD"]), Suit::Spades), Some(1));
}

#[test]
fn trump_beats_non_trump() {
    assert_eq!(resolve_trick(&cards(&["2D", "3S"]), Suit::Spades), Some(1));
}

#[test]
fn higher_trump_beats_lower_trump() {
    assert_eq!(resolve_trick(&cards(&["2S", "3S"]), Suit::Spades), Some(1));
    assert_eq!(resolve_trick(&cards(&["3S", "2S"]), Suit::Spades), Some(0));
}

#[test]
fn off_suit_non_trump_never_wins() {
    // lead diamonds, trump spades: the ace of hearts is discarded
    assert_eq!(
        resolve_trick(&cards(&["9D", "AH", "KD"]), Suit::Spades),
        Some(2)
    );
}

#[test]
fn trump_arrives_late_and_holds() {
    // 9♦, K♦, 2♠, A♦: the 2♠ wins
    assert_eq!(
        resolve_trick(&cards(&["9D", "KD", "2S", "AD"]), Suit::Spades),
        Some(2)
    );
}

#[test]
fn multiple_trumps_highest_wins() {
    assert_eq!(
        resolve_trick(&cards(&["2H", "QC", "3C", "AC"]), Suit::Clubs),
        Some(3)
    );
}

#[test]
fn lead_of_trump_suit() {
    assert_eq!(
        resolve_trick(&cards(&["5H", "KD", "4H", "AD"]), Suit::Hearts),
        Some(0)
    );
}

#[test]
fn equal_rank_does_not_overtake() {
    // Value-equal cards cannot co-exist in one deck, but the resolver must
    // still keep the earliest play.
    let two_d = Card::new(Suit::Diamonds, Rank::Two);
    assert_eq!(resolve_trick(&[two_d, two_d], Suit::Spades), Some(0));
    assert!(!card_beats(two_d, two_d, Suit::Spades));
}

#[test]
fn empty_and_single_tricks() {
    assert_eq!(resolve_trick(&[], Suit::Spades), None);
    assert_eq!(resolve_trick(&cards(&["7C"]), Suit::Hearts), Some(0));
}

#[test]
fn card_beats_cases() {
    let ah = Card::new(Suit::Hearts, Rank::Ace);
    let kh = Card::new(Suit::Hearts, Rank::King);
    let ts = Card::new(Suit::Spades, Rank::Ten);
    let td = Card::new(Suit::Diamonds, Rank::Ten);

    assert!(card_beats(ah, kh, Suit::Spades));
    assert!(!card_beats(kh, ah, Suit::Spades));
    assert!(card_beats(ts, ah, Suit::Spades));
    assert!(!card_beats(ah, ts, Suit::Spades));
    assert!(!card_beats(td, ah, Suit::Spades));
}
