//! HTTP layer for the folio search service, built on Axum
//!
//! Provides the `GET /search` and `GET /health` routes, request/response
//! DTOs, API error mapping, and a token-bucket rate limiter injected through
//! application state (no module-level mutable state, so the layer is
//! testable in isolation and safe under multiple server instances).

#![warn(clippy::all)]

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and application state.
pub mod handlers;
/// Request and response data transfer objects.
pub mod models;
/// Injected token bucket rate limiter.
pub mod rate_limit;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use errors::ApiError;
use handlers::AppState;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.rate_limiter.lock().try_acquire() {
        return Err(ApiError::TooManyRequests);
    }
    Ok(next.run(req).await)
}

/// Build the Axum router with all routes and middleware layers
///
/// The middleware stack (outermost to innermost):
/// Timeout → CORS → Trace → Rate limiting.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
