use axum::{
    extract::{
        path::ErrorKind,
        rejection::PathRejection,
        Path, State,
    },
    Json,
};

use crate::{
    core::GameState,
    error::GameError,
    models::{MoveParams, MoveRequest},
    services::engine,
    state::AppState,
};

/// Fetch the current game
///
/// # Returns
///
/// JSON game state
pub async fn get_state(State(state): State<AppState>) -> Json<GameState> {
    let mut store = state.store.lock().await;
    Json(engine::get_state(&mut store))
}

/// Move the top disk between two pegs
///
/// # Arguments
///
/// * `params` - `from` and `to` peg indices from the path
/// * `state` - Shared application state
///
/// # Returns
///
/// JSON game state after the move, or a structured error
pub async fn move_disk(
    params: Result<Path<MoveParams>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<GameState>, GameError> {
    let Path(params) = params.map_err(rejected_peg)?;
    let request = MoveRequest::new(params)?;

    // Held until the new state is stored so concurrent moves cannot interleave
    let mut store = state.store.lock().await;
    let game = engine::move_disk(&mut store, request.from, request.to)?;

    Ok(Json(game))
}

/// Report an undecodable path segment (e.g. invalid UTF-8) as a bad peg
fn rejected_peg(rejection: PathRejection) -> GameError {
    let name = match &rejection {
        PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
            ErrorKind::InvalidUtf8InPathParam { key } if key == "to" => "to",
            _ => "from",
        },
        _ => "from",
    };

    GameError::InvalidPeg {
        name,
        value: rejection.body_text(),
    }
}

/// Start the game over
///
/// # Returns
///
/// JSON starting game state
pub async fn reset_game(State(state): State<AppState>) -> Json<GameState> {
    let mut store = state.store.lock().await;
    Json(engine::reset(&mut store))
}
