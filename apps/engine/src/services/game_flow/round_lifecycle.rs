use tracing::{debug, info, warn};

use super::GameSession;
use crate::domain::state::{next_seat, round_start_seat, RoundState};
use crate::domain::{
    apply_round_scoring, deal_hands, resolve_trick, trump_after_round, Card, Notification,
    HAND_SIZE,
};
use crate::errors::domain::DomainError;

/// What happened to the trick in progress after a play or a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TrickProgress {
    /// Still waiting on cards.
    Open,
    /// The trick was resolved; the round continues.
    Resolved,
    /// The last trick was resolved and the round rolled over (or ended).
    RoundOver,
}

impl GameSession {
    /// Start (or restart) the game: dealer 0, round 1, Spades trump, fresh deal.
    ///
    /// A silent no-op with too few players. Scores carry over from any
    /// previous game.
    pub fn start_game(&mut self) -> Result<Vec<Notification>, DomainError> {
        if self.players.len() < self.min_players {
            debug!(
                players = self.players.len(),
                min_players = self.min_players,
                "start_game ignored: not enough players"
            );
            return Ok(Vec::new());
        }

        let deal = self.deal_round(RoundState::opening())?;
        info!(players = self.players.len(), "Game started");
        Ok(vec![deal])
    }

    /// Seat every registered player and deal them a fresh hand.
    ///
    /// Atomic: on `InsufficientCards` the session is unchanged.
    pub(super) fn deal_round(&mut self, mut round: RoundState) -> Result<Notification, DomainError> {
        let seating = self.players.ids();
        let seats = seating.len();
        let dealt = deal_hands(seats, HAND_SIZE, &mut self.rng)?;

        for (id, hand) in seating.iter().zip(dealt.hands) {
            if let Some(player) = self.players.get_mut(id) {
                player.reset_for_round(hand);
            }
        }

        // The table may have changed size since the dealer was chosen.
        round.dealer %= seats.max(1);
        round.first_player = round_start_seat(round.dealer, seats);
        round.current_player = round.first_player;
        round.seating = seating;
        round.current_trick.clear();

        info!(
            round_no = round.round_no,
            dealer = round.dealer,
            trump = ?round.trump,
            seats,
            "Round dealt"
        );

        let current_trump = round.trump;
        self.round = Some(round);
        Ok(Notification::Deal {
            players: self.players_view(),
            current_trump,
        })
    }

    /// Resolve the current trick once every seated player has played (or
    /// nobody has cards left), and roll the round over when hands run out.
    pub(super) fn settle_trick(&mut self, notes: &mut Vec<Notification>) -> TrickProgress {
        let Some(round) = self.round.as_mut() else {
            return TrickProgress::Open;
        };
        if round.current_trick.is_empty() {
            return TrickProgress::Open;
        }

        let hands_empty = self.players.as_slice().iter().all(|p| {
            !round.seating.contains(&p.id) || p.hand.is_empty()
        });
        if !round.trick_is_complete() && !hands_empty {
            return TrickProgress::Open;
        }

        let cards: Vec<Card> = round.current_trick.iter().map(|(_, c)| *c).collect();
        if let Some(idx) = resolve_trick(&cards, round.trump) {
            let winner = round.current_trick[idx].0.clone();
            if let Some(player) = self.players.get_mut(&winner) {
                player.tricks_won += 1;
            }
            debug!(player_id = %winner, card = %cards[idx], "Trick won");
            notes.push(Notification::TrickWon { player_id: winner });
        }
        round.current_trick.clear();

        if !hands_empty {
            return TrickProgress::Resolved;
        }

        self.finish_round(notes);
        TrickProgress::RoundOver
    }

    /// Score the round, rotate dealer and trump, and deal the next round.
    fn finish_round(&mut self, notes: &mut Vec<Notification>) {
        let Some(mut round) = self.round.take() else {
            return;
        };

        apply_round_scoring(self.players.seated_mut(&round.seating));

        round.dealer = next_seat(round.dealer, round.seat_count());
        round.round_no += 1;
        round.trump = trump_after_round(round.trump, round.round_no);
        info!(
            round_no = round.round_no,
            trump = ?round.trump,
            "Round scored"
        );

        match self.deal_round(round) {
            Ok(deal) => notes.push(deal),
            Err(err) => {
                // Players who joined mid-round can overflow the deck; fall
                // back to the lobby until startGame is sent again.
                warn!(error = %err, "Next round could not be dealt; returning to lobby");
                self.return_to_lobby();
                notes.push(Notification::UpdatePlayers {
                    players: self.players_view(),
                });
            }
        }
    }

    /// Drop the active round and clear every player's per-round state.
    pub(super) fn return_to_lobby(&mut self) {
        self.round = None;
        for player in self.players.iter_mut() {
            player.reset_for_round(Vec::new());
        }
    }
}
