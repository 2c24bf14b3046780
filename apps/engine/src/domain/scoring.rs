use crate::domain::rules::EXACT_PREDICTION_BONUS;
use crate::domain::state::Player;

/// Points earned for one round: tricks taken, plus the bonus on an exact prediction.
pub fn round_points(prediction: i32, tricks_won: u32) -> i32 {
    let tricks = i32::try_from(tricks_won).unwrap_or(i32::MAX);
    if prediction == tricks {
        EXACT_PREDICTION_BONUS + tricks
    } else {
        tricks
    }
}

/// Add this round's points to every player's cumulative score.
pub fn apply_round_scoring<'a>(players: impl IntoIterator<Item = &'a mut Player>) {
    for player in players {
        player.score += round_points(player.prediction, player.tricks_won);
    }
}
