pub mod game;
pub mod health;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    middleware::{rate_limit_middleware, security_headers_middleware},
    state::AppState,
};

/// Prefix of every game endpoint
pub const API_BASE: &str = "/toh/v1";

/// Build the full application router
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request_timeout` - Upper bound on handling a single request
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    // Every caller may use the API, credentials are never sent
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/state", get(game::get_state))
        .route("/move/:from/:to", post(game::move_disk))
        .route("/reset", post(game::reset_game));

    Router::new()
        .route("/health", get(health::health_check))
        .nest(API_BASE, api)
        .fallback(health::not_found)
        .with_state(state.clone())
        // Middleware layers, outermost first
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Outside the limiter and timeout so 429 and 408 stay readable
                .layer(cors)
                .layer(TimeoutLayer::new(request_timeout))
                .layer(middleware::from_fn(security_headers_middleware))
                .layer(middleware::from_fn_with_state(state, rate_limit_middleware)),
        )
}
