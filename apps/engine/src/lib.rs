#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod realtime;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::{Card, GameSnapshot, Notification, Player, PlayerId, Rank, Suit};
pub use error::AppError;
pub use errors::DomainError;
pub use realtime::{ClientMsg, GameHub, ServerMsg, TableId, TableRegistry};
pub use services::GameSession;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
