use crate::Identity;
use crate::api::extractors::identity::{TENANT_ID_HEADER, USER_ID_HEADER, USER_NAME_HEADER};

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    response::IntoResponse,
};

async fn extract(request: Request<Body>) -> Result<Identity, StatusCode> {
    let (mut parts, _body) = request.into_parts();
    Identity::from_request_parts(&mut parts, &())
        .await
        .map_err(|e| e.into_response().status())
}

#[tokio::test]
async fn given_all_headers_when_extracting_then_identity_populated() {
    let request = Request::builder()
        .header(TENANT_ID_HEADER, "7")
        .header(USER_ID_HEADER, "42")
        .header(USER_NAME_HEADER, "Alice")
        .body(Body::empty())
        .unwrap();

    let identity = extract(request).await.unwrap();

    assert_eq!(
        identity,
        Identity {
            tenant_id: 7,
            user_id: 42,
            user_name: "Alice".to_string(),
        }
    );
}

#[tokio::test]
async fn given_no_user_name_when_extracting_then_name_derived_from_id() {
    let request = Request::builder()
        .header(TENANT_ID_HEADER, "7")
        .header(USER_ID_HEADER, "42")
        .body(Body::empty())
        .unwrap();

    let identity = extract(request).await.unwrap();

    assert_eq!(identity.user_name, "user-42");
}

#[tokio::test]
async fn given_missing_tenant_header_when_extracting_then_unauthorized() {
    let request = Request::builder()
        .header(USER_ID_HEADER, "42")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await, Err(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn given_non_numeric_user_id_when_extracting_then_unauthorized() {
    let request = Request::builder()
        .header(TENANT_ID_HEADER, "7")
        .header(USER_ID_HEADER, "alice")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await, Err(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn given_zero_tenant_id_when_extracting_then_unauthorized() {
    let request = Request::builder()
        .header(TENANT_ID_HEADER, "0")
        .header(USER_ID_HEADER, "42")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await, Err(StatusCode::UNAUTHORIZED));
}
