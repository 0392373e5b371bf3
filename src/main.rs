use anyhow::Context;
use std::net::SocketAddr;

use tower_of_hanoi::{
    config::{self, Config},
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Before reading the config, so bad values get logged
    config::init_tracing();

    let config = Config::from_env();

    tracing::info!("Tower of Hanoi API starting...");

    // One shared game for the whole process
    let state = AppState::new(config.rate_limit);

    let app = routes::router(state, config.request_timeout);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on http://{}{}", addr, routes::API_BASE);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
