use crate::domain::scoring::{apply_round_scoring, round_points};
use crate::domain::state::Player;

fn player(prediction: i32, tricks_won: u32, score: i32) -> Player {
    let mut p = Player::new(format!("p{prediction}{tricks_won}").as_str().into(), "x");
    p.prediction = prediction;
    p.tricks_won = tricks_won;
    p.score = score;
    p
}

#[test]
fn exact_prediction_earns_bonus() {
    assert_eq!(round_points(3, 3), 13);
    assert_eq!(round_points(0, 0), 10);
}

#[test]
fn missed_prediction_earns_tricks_only() {
    assert_eq!(round_points(3, 2), 2);
    assert_eq!(round_points(0, 5), 5);
    assert_eq!(round_points(-1, 0), 0);
}

#[test]
fn out_of_range_prediction_is_scored_as_a_miss() {
    assert_eq!(round_points(20, 13), 13);
}

#[test]
fn scores_accumulate_across_rounds() {
    let mut players = vec![player(3, 3, 7), player(3, 2, 40)];
    apply_round_scoring(players.iter_mut());
    assert_eq!(players[0].score, 20);
    assert_eq!(players[1].score, 42);
}
