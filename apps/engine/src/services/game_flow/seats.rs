use tracing::{debug, info};

use super::round_lifecycle::TrickProgress;
use super::GameSession;
use crate::domain::state::{seat_after_removal, Player, PlayerId};
use crate::domain::Notification;

impl GameSession {
    /// Register a participant and broadcast the registry.
    ///
    /// A player joining mid-round is seated at the next deal.
    pub fn join(
        &mut self,
        player_id: PlayerId,
        username: impl Into<String>,
    ) -> (Player, Vec<Notification>) {
        let player = self.players.join(player_id, username).clone();
        info!(player_id = %player.id, username = %player.username, "Player joined");
        let notes = vec![Notification::UpdatePlayers {
            players: self.players_view(),
        }];
        (player, notes)
    }

    /// Remove a participant at any phase and broadcast the registry.
    ///
    /// Mid-round the table continues with a reduced turn order: the player's
    /// pending trick card is discarded and seat indices are repaired. A trick
    /// the departure completes is resolved before the turn is handed on. Below
    /// the minimum table size the round is abandoned and the session returns
    /// to the lobby.
    pub fn disconnect(&mut self, player_id: &PlayerId) -> Vec<Notification> {
        let removed = self.players.remove(player_id);
        debug!(%player_id, known = removed.is_some(), "Player disconnected");

        let mut on_turn_left = false;
        if let Some(round) = self.round.as_mut() {
            if let Some(seat) = round.seat_of(player_id) {
                on_turn_left = round.current_player == seat;
                round.seating.remove(seat);
                round.current_trick.retain(|(id, _)| id != player_id);

                let seats = round.seat_count();
                round.dealer = seat_after_removal(round.dealer, seat, seats);
                round.first_player = seat_after_removal(round.first_player, seat, seats);
                round.current_player = seat_after_removal(round.current_player, seat, seats);

                if seats < self.min_players {
                    info!(seats, "Round abandoned: too few players remain");
                    self.return_to_lobby();
                    on_turn_left = false;
                }
            }
        }

        let mut notes = vec![Notification::UpdatePlayers {
            players: self.players_view(),
        }];

        // Everyone left may already have played to the trick.
        let progress = self.settle_trick(&mut notes);
        if on_turn_left && progress != TrickProgress::RoundOver {
            if let Some(next) = self.round.as_ref().and_then(|r| r.current_player_id()) {
                notes.push(Notification::NextPlayer {
                    player_id: next.clone(),
                });
            }
        }
        notes
    }
}
