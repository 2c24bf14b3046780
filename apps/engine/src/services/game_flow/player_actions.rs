use tracing::{debug, warn};

use super::round_lifecycle::TrickProgress;
use super::GameSession;
use crate::domain::state::{next_seat, PlayerId};
use crate::domain::{Card, Notification};
use crate::errors::domain::DomainError;

impl GameSession {
    /// Record `value` as the player's prediction for this round.
    ///
    /// Last write wins and any integer is accepted. Unknown or unseated
    /// players, and predictions outside a round, are silently ignored. Once
    /// every seated player has predicted the registry is broadcast.
    pub fn make_prediction(&mut self, player_id: &PlayerId, value: i32) -> Vec<Notification> {
        let Some(round) = self.round.as_ref() else {
            debug!(%player_id, "make_prediction ignored: no round in progress");
            return Vec::new();
        };
        if round.seat_of(player_id).is_none() {
            debug!(%player_id, "make_prediction ignored: player not seated");
            return Vec::new();
        }
        let Some(player) = self.players.get_mut(player_id) else {
            return Vec::new();
        };

        player.prediction = value;
        player.has_predicted = true;
        debug!(%player_id, prediction = value, "Prediction recorded");

        let all_predicted = self
            .players
            .as_slice()
            .iter()
            .filter(|p| round.seating.contains(&p.id))
            .all(|p| p.has_predicted);
        if all_predicted {
            vec![Notification::UpdatePlayers {
                players: self.players_view(),
            }]
        } else {
            Vec::new()
        }
    }

    /// Play `card` from the player's hand into the current trick.
    ///
    /// Emits `cardPlayed`, then `trickWon` if the trick completed, then either
    /// `nextPlayer` or (when the round is exhausted) the next `deal`. Turn
    /// order is advisory: an out-of-turn play is accepted and logged, but
    /// each player contributes at most one card per trick.
    pub fn play_card(
        &mut self,
        player_id: &PlayerId,
        card: Card,
    ) -> Result<Vec<Notification>, DomainError> {
        let Some(round) = self.round.as_mut() else {
            return Err(DomainError::NoRoundInProgress);
        };
        let Some(player) = self.players.get_mut(player_id) else {
            return Err(DomainError::UnknownPlayer(player_id.clone()));
        };
        if round.current_trick.iter().any(|(id, _)| id == player_id) {
            return Err(DomainError::AlreadyPlayedToTrick(player_id.clone()));
        }
        if !player.remove_card(card) {
            return Err(DomainError::card_not_in_hand(player_id, card));
        }

        if round.current_player_id() != Some(player_id) {
            warn!(
                %player_id,
                expected = ?round.current_player_id(),
                "Card played out of turn"
            );
        }
        round.current_trick.push((player_id.clone(), card));
        debug!(%player_id, %card, "Card played");

        let mut notes = vec![Notification::CardPlayed {
            player_id: player_id.clone(),
            card,
        }];

        if self.settle_trick(&mut notes) != TrickProgress::RoundOver {
            if let Some(round) = self.round.as_mut() {
                round.current_player = next_seat(round.current_player, round.seat_count());
                if let Some(next) = round.current_player_id() {
                    notes.push(Notification::NextPlayer {
                        player_id: next.clone(),
                    });
                }
            }
        }

        Ok(notes)
    }
}
