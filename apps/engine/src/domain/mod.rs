//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_transition;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, deal_hands, full_deck, shuffle, Dealt};
pub use game_transition::Notification;
pub use players::PlayerRegistry;
pub use rules::{trump_after_round, HAND_SIZE, MIN_PLAYERS};
pub use scoring::{apply_round_scoring, round_points};
pub use snapshot::GameSnapshot;
pub use state::{Phase, Player, PlayerId, RoundState};
pub use tricks::{card_beats, resolve_trick};
