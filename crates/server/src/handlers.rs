//! HTTP request handlers and shared application state
//!
//! Each public async function corresponds to a route registered in
//! [`create_router`](crate::create_router). Handlers extract query
//! parameters via Axum extractors and delegate to the
//! [`SearchOrchestrator`], returning JSON responses or
//! [`ApiError`](crate::errors::ApiError) on failure.

use crate::errors::ApiError;
use crate::models::{HealthResponse, SearchParams, SearchResponseBody};
use crate::rate_limit::TokenBucket;
use axum::extract::{Query, State};
use axum::Json;
use folio_core::limits::{DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT};
use folio_search::SearchOrchestrator;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor
#[derive(Clone)]
pub struct AppState {
    /// The search pipeline
    pub orchestrator: Arc<SearchOrchestrator>,
    /// Injected rate limiter (one bucket per server instance)
    pub rate_limiter: Arc<Mutex<TokenBucket>>,
    /// Server start time, for health reporting
    pub start_time: Instant,
}

impl AppState {
    /// Create application state around an orchestrator
    pub fn new(orchestrator: SearchOrchestrator, rate_limit_rps: u64) -> Self {
        AppState {
            orchestrator: Arc::new(orchestrator),
            rate_limiter: Arc::new(Mutex::new(TokenBucket::new(rate_limit_rps))),
            start_time: Instant::now(),
        }
    }
}

/// `GET /search?q={query}&limit={n}` — ranked search over all content
///
/// Returns 200 with the result envelope; a too-short query is a 200 with
/// `success: false` and a validation message (the documented client
/// contract), and a repository failure is a generic 500.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponseBody>, ApiError> {
    let query = params.q.unwrap_or_default();
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RESULT_LIMIT)
        .min(MAX_RESULT_LIMIT);

    match state.orchestrator.search(&query, limit).await {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(e) => {
            tracing::error!(error = %e, "search request failed");
            Err(ApiError::Internal)
        }
    }
}

/// `GET /health` — liveness endpoint with version and uptime
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
