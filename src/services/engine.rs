use crate::{
    core::{GameState, GameStore, GAME_TTL},
    error::GameError,
};

/// Fetch the current game
///
/// # Arguments
///
/// * `store` - The game store
pub fn get_state(store: &mut GameStore) -> GameState {
    store.get()
}

/// Move the top disk from one peg to another and persist the result
///
/// # Arguments
///
/// * `store` - The game store
/// * `from` - Source peg index (0-2)
/// * `to` - Destination peg index (0-2)
///
/// # Returns
///
/// The game after the move
///
/// # Errors
///
/// Returns an error if the game is over, the move is illegal, or the stored
/// game is corrupt. The stored game is left untouched in every error case.
pub fn move_disk(store: &mut GameStore, from: usize, to: usize) -> Result<GameState, GameError> {
    let mut state = store.get();

    state
        .validate()
        .map_err(|e| GameError::Internal(format!("Stored game state is corrupt: {}", e)))?;

    state.apply_move(from, to)?;

    if state.completed {
        tracing::info!("Puzzle solved in {} moves", state.moves);
    } else {
        tracing::debug!("Moved disk {} -> {} (move {})", from, to, state.moves);
    }

    store.set(state.clone(), GAME_TTL);
    Ok(state)
}

/// Replace the stored game with the starting position
///
/// # Arguments
///
/// * `store` - The game store
pub fn reset(store: &mut GameStore) -> GameState {
    let state = GameState::new();
    store.set(state.clone(), GAME_TTL);
    tracing::info!("Game reset");
    state
}
