//! # HTTP API
//!
//! axum server for the survey submission flow.
//!
//! Routes:
//! - `GET  /health`          liveness and version
//! - `GET  /rules`           rule cascade in priority order
//! - `POST /classify`        `{"responses": [...]}` → verdict
//! - `POST /classify/batch`  `{"sectors": [...]}` → assessments + summary
//!
//! The POST routes are rate limited and, when an API key is configured,
//! require `Authorization: Bearer <key>`.

use crate::cli::rule_descriptors;
use crate::config::ServerConfig;
use crate::error::CliError;
use acervo_core::{
    BatchReport, CriticalityVerdict, RuleDescriptor, SectorResponse, SectorSurvey, classify,
    classify_batch,
};
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Maximum accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// STATE
// =============================================================================

/// Shared, read-only server state.
pub struct AppState {
    api_key: Option<String>,
    limiter: DefaultDirectRateLimiter,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: &ServerConfig) -> Self {
        let per_second = NonZeroU32::new(config.rate_limit).unwrap_or(NonZeroU32::MIN);
        Self {
            api_key: config.api_key().map(str::to_string),
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
        }
    }

    fn authorized(&self, request: &Request) -> bool {
        let Some(expected) = self.api_key.as_deref() else {
            return true;
        };
        request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .is_some_and(|provided| bool::from(provided.as_bytes().ct_eq(expected.as_bytes())))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub responses: Vec<SectorResponse>,
}

/// Body of `POST /classify/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub sectors: Vec<SectorSurvey>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// JSON error returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by the API layer itself.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    RateLimited,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "missing or invalid API key"),
            Self::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded"),
        };
        let body = ErrorBody {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router.
pub fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(config));

    let guarded = Router::new()
        .route("/classify", post(classify_handler))
        .route("/classify/batch", post(batch_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard));

    Router::new()
        .route("/health", get(health_handler))
        .route("/rules", get(rules_handler))
        .merge(guarded)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> Result<(), CliError> {
    let addr = config.socket_addr()?;
    let router = create_router(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        auth = config.api_key().is_some(),
        rate_limit = config.rate_limit,
        "acervo server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("acervo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}

async fn guard(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    if !state.authorized(&request) {
        warn!(path = %request.uri().path(), "rejected unauthorized request");
        return ApiError::Unauthorized.into_response();
    }
    if state.limiter.check().is_err() {
        warn!(path = %request.uri().path(), "rate limit exceeded");
        return ApiError::RateLimited.into_response();
    }
    next.run(request).await
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn rules_handler() -> Json<Vec<RuleDescriptor>> {
    Json(rule_descriptors())
}

async fn classify_handler(Json(request): Json<ClassifyRequest>) -> Json<CriticalityVerdict> {
    let verdict = classify(&request.responses);
    debug!(
        responses = request.responses.len(),
        level = %verdict.level,
        "sector classified"
    );
    Json(verdict)
}

async fn batch_handler(Json(request): Json<BatchRequest>) -> Json<BatchReport> {
    let report = classify_batch(&request.sectors);
    debug!(
        sectors = report.summary.total,
        high = report.summary.high_sectors.len(),
        "batch classified"
    );
    Json(report)
}
