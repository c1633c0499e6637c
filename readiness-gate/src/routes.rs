//! Axum route handlers for the probe service.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::gate::ReadinessGate;

/// Body of `GET /`.
pub const WELCOME: &str = "welcome to the shawarma wrap app";

type Gate = Arc<ReadinessGate>;

/// Build the probe router over a shared gate.
pub fn create_router(gate: Gate) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/healthyz", get(healthyz))
        .route("/readyz", get(readyz))
        .with_state(gate)
        .layer(TraceLayer::new_for_http())
}

/// `GET /`: static welcome text.
pub async fn home() -> &'static str {
    WELCOME
}

/// `GET /healthyz`: liveness probe. Always healthy; every call counts
/// toward the warm-up.
pub async fn healthyz(State(gate): State<Gate>) -> impl IntoResponse {
    let count = gate.record_probe();
    tracing::debug!(probes = count, threshold = gate.threshold(), "liveness probe");
    (StatusCode::OK, "healthy")
}

/// `GET /readyz`: readiness probe. No side effects.
pub async fn readyz(State(gate): State<Gate>) -> impl IntoResponse {
    if gate.is_ready() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
        let req = match Request::builder().uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.clone().oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn home_returns_welcome() {
        let app = create_router(Arc::new(ReadinessGate::default()));
        assert_eq!(get_text(&app, "/").await, (StatusCode::OK, WELCOME.to_owned()));
    }

    #[tokio::test]
    async fn healthyz_always_ok_and_counts() {
        let gate = Arc::new(ReadinessGate::default());
        let app = create_router(Arc::clone(&gate));
        for _ in 0..3 {
            assert_eq!(get_text(&app, "/healthyz").await, (StatusCode::OK, "healthy".to_owned()));
        }
        assert_eq!(gate.probe_count(), 3);
    }

    #[tokio::test]
    async fn readyz_has_no_side_effects() {
        let gate = Arc::new(ReadinessGate::default());
        let app = create_router(Arc::clone(&gate));
        for _ in 0..20 {
            let (status, body) = get_text(&app, "/readyz").await;
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "not ready");
        }
        assert_eq!(gate.probe_count(), 0, "readiness probes must not count");
    }

    #[tokio::test]
    async fn readyz_flips_after_eleven_liveness_probes_and_stays() {
        let app = create_router(Arc::new(ReadinessGate::default()));
        for n in 1..=25 {
            get_text(&app, "/healthyz").await;
            let (status, body) = get_text(&app, "/readyz").await;
            if n > 10 {
                assert_eq!((status, body.as_str()), (StatusCode::OK, "ready"), "after {n} probes");
            } else {
                assert_eq!(
                    (status, body.as_str()),
                    (StatusCode::SERVICE_UNAVAILABLE, "not ready"),
                    "after {n} probes"
                );
            }
        }
    }

    #[tokio::test]
    async fn gate_driven_directly_is_visible_over_http() {
        let gate = Arc::new(ReadinessGate::new(2));
        let app = create_router(Arc::clone(&gate));
        for _ in 0..3 {
            gate.record_probe();
        }
        assert_eq!(get_text(&app, "/readyz").await.0, StatusCode::OK);
    }
}
