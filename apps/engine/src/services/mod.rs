pub mod game_flow;

pub use game_flow::GameSession;
