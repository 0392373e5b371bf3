pub mod requests;
pub mod responses;

pub use requests::{MoveParams, MoveRequest};
pub use responses::{ErrorResponse, HealthResponse};
