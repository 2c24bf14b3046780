//! Boundary with the transport: wire messages and per-table fan-out.

pub mod hub;
pub mod protocol;

pub use hub::{GameHub, TableId, TableRegistry};
pub use protocol::{ClientMsg, ErrorMsg, ServerMsg};
