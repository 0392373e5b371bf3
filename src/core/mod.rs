pub mod constants;
pub mod game_state;
pub mod game_store;

pub use constants::*;
pub use game_state::GameState;
pub use game_store::{GameStore, GAME_TTL};
