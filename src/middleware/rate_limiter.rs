use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::{models::ErrorResponse, routes::API_BASE, state::AppState};

/// Track request rates per IP address using sliding window
#[derive(Clone)]
pub struct RateLimiter {
    /// Map of IP -> list of request timestamps
    requests: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    /// Last cleanup time
    last_cleanup: Arc<Mutex<Instant>>,
    /// Cleanup interval in seconds
    cleanup_interval: u64,
    /// Requests per second allowed on the game API
    api_limit: usize,
}

impl RateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    ///
    /// * `api_limit` - Requests per second per IP on the game API
    pub fn new(api_limit: usize) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            last_cleanup: Arc::new(Mutex::new(Instant::now())),
            cleanup_interval: 60,
            api_limit,
        }
    }

    /// Check if request is allowed under rate limit
    ///
    /// # Arguments
    ///
    /// * `ip` - Client IP address
    /// * `limit` - Maximum requests allowed in window
    /// * `window` - Time window
    ///
    /// # Returns
    ///
    /// True if request is allowed, False if rate limit exceeded
    pub async fn is_allowed(&self, ip: IpAddr, limit: usize, window: Duration) -> bool {
        let now = Instant::now();

        let mut requests = self.requests.lock().await;
        let timestamps = requests.entry(ip).or_default();

        // Drop requests that fell out of the window
        timestamps.retain(|&ts| now.duration_since(ts) < window);

        if timestamps.len() >= limit {
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Remove stale IP entries to prevent memory leaks
    async fn cleanup_old_entries(&self) {
        let now = Instant::now();

        let mut last_cleanup = self.last_cleanup.lock().await;

        if now.duration_since(*last_cleanup) < Duration::from_secs(self.cleanup_interval) {
            return;
        }

        let stale_after = Duration::from_secs(60);
        let mut requests = self.requests.lock().await;
        requests.retain(|_, timestamps| {
            timestamps
                .iter()
                .any(|&ts| now.duration_since(ts) < stale_after)
        });

        *last_cleanup = now;
    }

    /// Get rate limit for endpoint
    ///
    /// # Arguments
    ///
    /// * `path` - Request path
    ///
    /// # Returns
    ///
    /// Requests per second limit, or None to skip rate limiting
    fn limit_for(&self, path: &str) -> Option<usize> {
        if path == "/health" {
            return Some(10);
        }

        if path.starts_with(API_BASE) {
            return Some(self.api_limit);
        }

        // Unknown paths end in a cheap 404
        None
    }
}

/// Axum middleware to enforce rate limits per IP address
///
/// # Arguments
///
/// * `state` - Shared application state holding the limiter
/// * `req` - Incoming request
/// * `next` - Next middleware/handler
///
/// # Returns
///
/// Response or rate limit error
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let limiter = &state.rate_limiter;
    let Some(limit) = limiter.limit_for(req.uri().path()) else {
        return next.run(req).await;
    };

    if !limiter.is_allowed(ip, limit, Duration::from_secs(1)).await {
        tracing::warn!("Rate limit exceeded for {}", ip);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(
                "rate_limited",
                "Rate limit exceeded. Please try again later.",
            )),
        )
            .into_response();
    }

    limiter.cleanup_old_entries().await;

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    #[test]
    fn test_limit_for_health() {
        assert_eq!(RateLimiter::new(100).limit_for("/health"), Some(10));
    }

    #[test]
    fn test_limit_for_api() {
        let limiter = RateLimiter::new(42);
        assert_eq!(limiter.limit_for("/toh/v1/state"), Some(42));
        assert_eq!(limiter.limit_for("/toh/v1/move/0/2"), Some(42));
    }

    #[test]
    fn test_limit_for_unknown_path() {
        assert_eq!(RateLimiter::new(100).limit_for("/wp-admin"), None);
    }

    #[tokio::test]
    async fn test_rate_limiter_blocks_over_limit() {
        let limiter = RateLimiter::new(5);
        let ip: IpAddr = "127.0.0.1".parse().unwrap();

        for _ in 0..5 {
            assert!(limiter.is_allowed(ip, 5, Duration::from_secs(1)).await);
        }

        assert!(!limiter.is_allowed(ip, 5, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn test_rate_limiter_different_ips() {
        let limiter = RateLimiter::new(5);
        let ip1: IpAddr = "127.0.0.1".parse().unwrap();
        let ip2: IpAddr = "192.168.1.1".parse().unwrap();

        for _ in 0..5 {
            assert!(limiter.is_allowed(ip1, 5, Duration::from_secs(1)).await);
        }

        assert!(!limiter.is_allowed(ip1, 5, Duration::from_secs(1)).await);
        assert!(limiter.is_allowed(ip2, 5, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn test_rate_limiter_window_reset() {
        let limiter = RateLimiter::new(3);
        let ip: IpAddr = "127.0.0.1".parse().unwrap();

        for _ in 0..3 {
            assert!(limiter.is_allowed(ip, 3, Duration::from_millis(100)).await);
        }
        assert!(!limiter.is_allowed(ip, 3, Duration::from_millis(100)).await);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(limiter.is_allowed(ip, 3, Duration::from_millis(100)).await);
    }

    #[tokio::test]
    async fn test_middleware_returns_429() {
        let state = AppState::new(2);
        let app = Router::new()
            .route("/toh/v1/state", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                rate_limit_middleware,
            ))
            .with_state(state);

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/toh/v1/state")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            statuses.push(response.status());
        }

        assert_eq!(
            statuses,
            vec![StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]
        );
    }
}
