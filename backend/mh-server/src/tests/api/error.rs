use crate::ApiError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_unauthorized_when_into_response_then_401_with_code() {
    let (status, json) = body_json(ApiError::unauthorized("Missing X-User-Id header")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Missing X-User-Id header");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_into_response_then_400_with_field() {
    let (status, json) = body_json(ApiError::validation("itemId must not be negative", "itemId")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "itemId");
}

#[tokio::test]
async fn given_unavailable_when_into_response_then_503() {
    let error = ApiError::Unavailable {
        message: "Server is shutting down".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(json["error"]["message"], "Server is shutting down");
}
