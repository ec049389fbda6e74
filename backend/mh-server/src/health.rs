use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with hub status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": if state.shutdown.is_shutdown() { "shutting_down" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "hub": {
                "status": "operational",
                "tenants": state.hub.tenant_count().await,
            },
        },
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; not ready once shutdown has begun
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}

/// GET /metrics - Prometheus exposition of hub metrics
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}
