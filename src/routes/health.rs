use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::models::{ErrorResponse, HealthResponse};

/// Health check endpoint
///
/// # Returns
///
/// JSON response with status
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Fallback for any path or method without a route
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "rest_no_route",
            "No route was found matching the URL and request method.",
        )),
    )
}
