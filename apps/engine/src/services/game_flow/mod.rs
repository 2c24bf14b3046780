//! Game session controller.
//!
//! `GameSession` owns the player registry and the active round for one
//! table. Every inbound event is a `&mut self` method that either applies its
//! whole transition and returns the notifications to broadcast (in emission
//! order), or fails and leaves the session untouched.

mod player_actions;
mod round_lifecycle;
mod seats;


use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::config::EngineConfig;
use crate::domain::snapshot::{GameSnapshot, RoundSnapshot, TrickPlay};
use crate::domain::state::{Phase, Player, RoundState};
use crate::domain::PlayerRegistry;

#[derive(Debug, Clone)]
pub struct GameSession {
    players: PlayerRegistry,
    /// `None` while in the lobby.
    round: Option<RoundState>,
    rng: ChaCha20Rng,
    min_players: usize,
}

impl GameSession {
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self {
            players: PlayerRegistry::new(),
            round: None,
            rng,
            min_players: config.min_players,
        }
    }

    /// Session with default settings and a fixed shuffle seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(&EngineConfig::default().with_seed(seed))
    }

    pub fn phase(&self) -> Phase {
        if self.round.is_some() {
            Phase::InRound
        } else {
            Phase::Lobby
        }
    }

    pub fn players(&self) -> &[Player] {
        self.players.as_slice()
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            players: self.players.as_slice().to_vec(),
            round: self.round.as_ref().map(|r| RoundSnapshot {
                round_no: r.round_no,
                dealer: r.dealer,
                trump: r.trump,
                first_player: r.first_player,
                current_player: r.current_player,
                seating: r.seating.clone(),
                current_trick: r
                    .current_trick
                    .iter()
                    .map(|(player_id, card)| TrickPlay {
                        player_id: player_id.clone(),
                        card: *card,
                    })
                    .collect(),
            }),
        }
    }

    fn players_view(&self) -> Vec<Player> {
        self.players.as_slice().to_vec()
    }
}
