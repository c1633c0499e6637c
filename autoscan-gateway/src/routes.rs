//! Axum route handlers for the autoscan API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use autoscan_core::{simulate_scan, NewScanRun, ScanId, ScanRequest, ScanResult, ScanRun};
use autoscan_store::{ScanStore, LIST_LIMIT};

use crate::{env::EnvSnapshot, error::GatewayError};

/// Name reported by `GET /api/health`.
pub const SERVICE_NAME: &str = "autoscan-backend";

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScanStore>,
}

impl AppState {
    /// Wrap a store for use by the router.
    #[must_use]
    pub fn new(store: Arc<dyn ScanStore>) -> Self {
        Self { store }
    }
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScanListResponse {
    pub items: Vec<ScanRun>,
}

#[derive(Debug, Serialize)]
pub struct CreateScanResponse {
    pub id: ScanId,
    pub result: ScanResult,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/scans", get(list_scans).post(create_scan))
        .route("/api/env", get(env_snapshot))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /api/health`: static liveness report.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok", service: SERVICE_NAME })
}

/// `GET /api/scans`: the most recent runs, newest first.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the store cannot be read.
pub async fn list_scans(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let items = state.store.recent(LIST_LIMIT).await?;
    Ok(Json(ScanListResponse { items }))
}

/// `POST /api/scans`: simulate a scan and persist the run.
///
/// The body is parsed leniently: anything that is not a JSON object counts
/// as `{}`, and missing fields take their defaults.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the insert fails.
pub async fn create_scan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let request = ScanRequest::from_body(&body);
    let result = simulate_scan(&mut rand::thread_rng(), &request);

    let run = NewScanRun::new(request, result.clone());
    let id = state.store.insert(&run).await?;

    info!(
        scan_id = %id,
        target = %run.target,
        automation_mode = %run.automation_mode,
        status = %result.status,
        "scan recorded"
    );

    Ok((StatusCode::CREATED, Json(CreateScanResponse { id, result })))
}

/// `GET /api/env`: deployment diagnostics.
pub async fn env_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(EnvSnapshot::capture(state.store.location()))
}
