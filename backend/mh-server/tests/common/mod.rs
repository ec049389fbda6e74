#![allow(dead_code)]

//! Test infrastructure for mh-server API tests

use mh_hub::{Hub, HubSettings, Metrics, ShutdownCoordinator};
use mh_server::AppState;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request},
};

pub const TENANT: i64 = 1;
pub const OTHER_TENANT: i64 = 2;

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    AppState::new(
        Hub::new(HubSettings::default(), Metrics::new()),
        ShutdownCoordinator::new(),
        Duration::from_secs(15),
    )
}

/// Request carrying the identity headers of `user_id` in `tenant_id`
pub fn authed_request(
    method: Method,
    uri: &str,
    tenant_id: i64,
    user_id: i64,
    body: Body,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Tenant-Id", tenant_id.to_string())
        .header("X-User-Id", user_id.to_string())
        .header("X-User-Name", format!("Staff {}", user_id))
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap()
}

pub fn presence_body(item_id: i64) -> Body {
    Body::from(serde_json::json!({ "itemId": item_id }).to_string())
}
