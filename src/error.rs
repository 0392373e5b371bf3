use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Reasons a move is refused by the rules of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveViolation {
    #[error("Invalid move. No disks on the selected peg.")]
    EmptySource,
    #[error("Invalid move. Cannot place a larger disk on a smaller one.")]
    LargerOnSmaller,
    #[error("Invalid move. Source and destination pegs must differ.")]
    SamePeg,
}

/// Every failure a game request can end in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A move was submitted after the puzzle was solved
    #[error("The game is already finished.")]
    GameOver,

    /// The move breaks the rules of the puzzle
    #[error(transparent)]
    InvalidMove(#[from] MoveViolation),

    /// A peg parameter is not one of 0, 1 or 2
    #[error("Invalid parameter(s): {name}")]
    InvalidPeg { name: &'static str, value: String },

    /// Anything unexpected while applying a move
    #[error("{0}")]
    Internal(String),
}

impl GameError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            GameError::GameOver => "game_over",
            GameError::InvalidMove(_) => "invalid_move",
            GameError::InvalidPeg { .. } => "rest_invalid_param",
            GameError::Internal(_) => "move_disk_error",
        }
    }

    /// HTTP status the error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        match &self {
            GameError::Internal(message) => tracing::error!("Move failed: {}", message),
            other => tracing::debug!("Rejected request: {} ({})", other, other.code()),
        }

        let body = ErrorResponse::new(self.code(), self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
