pub mod engine;

pub use engine::{get_state, move_disk, reset};
