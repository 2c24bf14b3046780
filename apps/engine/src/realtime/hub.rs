use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::Notification;
use crate::error::AppError;
use crate::realtime::protocol::ClientMsg;
use crate::services::GameSession;

/// One table: a session behind a lock plus a fan-out channel.
///
/// Events are applied one at a time, and their notifications are published
/// while the lock is still held, so every subscriber sees them in event order.
pub struct GameHub {
    session: Mutex<GameSession>,
    sender: broadcast::Sender<Notification>,
}

impl GameHub {
    pub fn new(config: &EngineConfig) -> Self {
        let (sender, _) = broadcast::channel(config.broadcast_capacity);
        Self {
            session: Mutex::new(GameSession::new(config)),
            sender,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Apply one inbound event and broadcast what it produced.
    ///
    /// On error nothing is broadcast; the error belongs to the caller only.
    pub fn dispatch(&self, msg: ClientMsg) -> Result<Vec<Notification>, AppError> {
        let mut session = self.session.lock();
        let notes = match msg {
            ClientMsg::Join {
                player_id,
                username,
            } => session.join(player_id, username).1,
            ClientMsg::StartGame => session.start_game()?,
            ClientMsg::MakePrediction {
                player_id,
                prediction,
            } => session.make_prediction(&player_id, prediction),
            ClientMsg::PlayCard { player_id, card } => session.play_card(&player_id, card)?,
            ClientMsg::Disconnect { player_id } => session.disconnect(&player_id),
        };

        for note in &notes {
            // No subscribers is not an error.
            if self.sender.send(note.clone()).is_err() {
                debug!(kind = note.kind(), "Notification dropped: no subscribers");
            }
        }
        Ok(notes)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.lock().snapshot()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(Uuid);

impl TableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Independent tables, each with its own session.
pub struct TableRegistry {
    config: EngineConfig,
    tables: DashMap<TableId, Arc<GameHub>>,
}

impl TableRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tables: DashMap::new(),
        }
    }

    pub fn open(&self) -> (TableId, Arc<GameHub>) {
        let id = TableId::new();
        let hub = Arc::new(GameHub::new(&self.config));
        self.tables.insert(id, hub.clone());
        info!(table_id = %id, "Table opened");
        (id, hub)
    }

    pub fn get(&self, id: TableId) -> Option<Arc<GameHub>> {
        self.tables.get(&id).map(|entry| entry.value().clone())
    }

    /// Drop a table. Subscribers see their channel close once the last hub handle goes.
    pub fn close(&self, id: TableId) -> bool {
        let removed = self.tables.remove(&id).is_some();
        if removed {
            info!(table_id = %id, "Table closed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
