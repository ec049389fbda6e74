use crate::{AppState, health, queue_presence, queue_viewers, report_presence, report_viewers, stream_events};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Event stream
        .route("/api/v1/events/{channel}", get(stream_events))
        // Presence heartbeats
        .route("/api/v1/reports/presence", post(report_presence))
        .route("/api/v1/queue/presence", post(queue_presence))
        // Viewer snapshots
        .route("/api/v1/reports/viewers", get(report_viewers))
        .route("/api/v1/queue/viewers", get(queue_viewers))
        // Health and metrics
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
