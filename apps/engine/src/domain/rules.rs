use crate::domain::Suit;

/// Cards dealt to every seated player, every round.
pub const HAND_SIZE: usize = 13;
/// Fewest registered players that may start a game.
pub const MIN_PLAYERS: usize = 2;
/// Trump advances whenever the new round number is a multiple of this.
pub const TRUMP_ROTATION_PERIOD: u32 = 6;
/// Flat bonus for taking exactly the predicted number of tricks.
pub const EXACT_PREDICTION_BONUS: i32 = 10;

/// Trump for the round numbered `round_no`, given the trump of the round
/// that just finished. `round_no` is the already-incremented number.
pub fn trump_after_round(trump: Suit, round_no: u32) -> Suit {
    if round_no % TRUMP_ROTATION_PERIOD == 0 {
        trump.next()
    } else {
        trump
    }
}
