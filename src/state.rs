// Shared application state

use crate::{core::GameStore, middleware::RateLimiter};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    /// The single game, locked for the whole of each request
    pub store: Arc<Mutex<GameStore>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(rate_limit: usize) -> Self {
        Self {
            store: Arc::new(Mutex::new(GameStore::new())),
            rate_limiter: RateLimiter::new(rate_limit),
        }
    }
}
