use time::{Duration, OffsetDateTime};

use super::{GameState, GAME_TTL_SECONDS};

/// Time-to-live applied on every write to the store
pub const GAME_TTL: Duration = Duration::seconds(GAME_TTL_SECONDS);

/// Stored game together with the moment it stops being valid
#[derive(Debug, Clone)]
struct StoredGame {
    state: GameState,
    expires_at: OffsetDateTime,
}

/// Holder of the single shared game
///
/// Expiry is checked lazily whenever the game is read, so an abandoned game
/// silently turns back into a fresh one.
#[derive(Debug, Default)]
pub struct GameStore {
    entry: Option<StoredGame>,
}

impl GameStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Current game, or a freshly stored starting position if none is live
    pub fn get(&mut self) -> GameState {
        if let Some(stored) = self.entry.as_ref().filter(|stored| !Self::expired(stored)) {
            return stored.state.clone();
        }

        tracing::info!("No live game found, starting a new one");
        let state = GameState::new();
        self.set(state.clone(), GAME_TTL);
        state
    }

    /// Overwrite the stored game and restart its time-to-live
    ///
    /// # Arguments
    ///
    /// * `state` - The game to store
    /// * `ttl` - How long the game stays valid
    pub fn set(&mut self, state: GameState, ttl: Duration) {
        self.entry = Some(StoredGame {
            state,
            expires_at: OffsetDateTime::now_utc() + ttl,
        });
    }

    /// Whether there is no live game (never stored, or past its TTL)
    pub fn is_expired(&self) -> bool {
        self.entry.as_ref().map_or(true, Self::expired)
    }

    /// Force the stored game to expire immediately
    pub fn expire(&mut self) {
        if let Some(stored) = self.entry.as_mut() {
            stored.expires_at = OffsetDateTime::now_utc();
        }
    }

    fn expired(stored: &StoredGame) -> bool {
        stored.expires_at <= OffsetDateTime::now_utc()
    }
}
