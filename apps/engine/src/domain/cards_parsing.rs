//! Card parsing from string representations (e.g., "AS", "2C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::parse_card(s));
        };
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.symbol() == rank_ch)
            .ok_or_else(|| DomainError::parse_card(s))?;
        let suit = Suit::ALL
            .into_iter()
            .find(|su| su.symbol() == suit_ch)
            .ok_or_else(|| DomainError::parse_card(s))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
