//! Ordered registry of participants.

use crate::domain::state::{Player, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id`, or rename it if already present. Returns the stored player.
    pub fn join(&mut self, id: PlayerId, username: impl Into<String>) -> &Player {
        let username = username.into();
        let idx = match self.position(&id) {
            Some(idx) => {
                self.players[idx].username = username;
                idx
            }
            None => {
                self.players.push(Player::new(id, username));
                self.players.len() - 1
            }
        };
        &self.players[idx]
    }

    /// Drop `id` from the registry, returning the removed player.
    pub fn remove(&mut self, id: &PlayerId) -> Option<Player> {
        let idx = self.position(id)?;
        Some(self.players.remove(idx))
    }

    pub fn position(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Players whose ids appear in `seating`, in registry order.
    pub fn seated_mut<'a>(
        &'a mut self,
        seating: &'a [PlayerId],
    ) -> impl Iterator<Item = &'a mut Player> + 'a {
        self.players
            .iter_mut()
            .filter(move |p| seating.contains(&p.id))
    }
}
