#![allow(dead_code)]

// tests/common/mod.rs
use judgment_engine::{ClientMsg, GameHub, Notification, PlayerId};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// A fresh, test-unique player identity.
pub fn player_id(prefix: &str) -> PlayerId {
    PlayerId::new(engine_test_support::unique_str(prefix))
}

/// Join `n` players to the hub and return their ids in seating order.
pub fn seat_players(hub: &GameHub, n: usize) -> Vec<PlayerId> {
    (0..n)
        .map(|i| {
            let id = player_id(&format!("seat{i}"));
            hub.dispatch(ClientMsg::Join {
                player_id: id.clone(),
                username: format!("player{i}"),
            })
            .expect("join never fails");
            id
        })
        .collect()
}

/// Play the current player's first card until the round number changes.
/// Returns every notification produced along the way.
pub fn play_out_round(hub: &GameHub) -> Vec<Notification> {
    let mut all = Vec::new();
    let start = hub.snapshot().round.map(|r| r.round_no);
    loop {
        let snapshot = hub.snapshot();
        let Some(round) = snapshot.round else { break };
        if Some(round.round_no) != start {
            break;
        }
        let pid = round.seating[round.current_player].clone();
        let card = snapshot
            .players
            .iter()
            .find(|p| p.id == pid)
            .and_then(|p| p.hand.first().copied())
            .expect("current player holds a card");
        all.extend(
            hub.dispatch(ClientMsg::PlayCard {
                player_id: pid,
                card,
            })
            .expect("legal play"),
        );
    }
    all
}
