use crate::{ApiError, ApiResult, AppState, Identity, PresenceRequest};

use mh_hub::PresenceDomain;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/v1/reports/presence
pub async fn report_presence(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<PresenceRequest>,
) -> ApiResult<StatusCode> {
    heartbeat(&state, PresenceDomain::Reports, identity, request).await
}

/// POST /api/v1/queue/presence
pub async fn queue_presence(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<PresenceRequest>,
) -> ApiResult<StatusCode> {
    heartbeat(&state, PresenceDomain::Queue, identity, request).await
}

async fn heartbeat(
    state: &AppState,
    domain: PresenceDomain,
    identity: Identity,
    request: PresenceRequest,
) -> ApiResult<StatusCode> {
    if request.item_id < 0 {
        return Err(ApiError::validation("itemId must not be negative", "itemId"));
    }

    state
        .hub
        .heartbeat(
            domain,
            identity.tenant_id,
            identity.user_id,
            &identity.user_name,
            request.item_id,
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}
