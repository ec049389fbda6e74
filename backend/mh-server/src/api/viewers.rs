use crate::{AppState, Identity};

use mh_hub::ItemViewers;

use axum::{Json, extract::State};

/// GET /api/v1/reports/viewers - who is viewing which report in the caller's tenant
pub async fn report_viewers(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<Vec<ItemViewers>> {
    Json(state.hub.get_all_active_viewers(identity.tenant_id).await)
}

/// GET /api/v1/queue/viewers
pub async fn queue_viewers(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<Vec<ItemViewers>> {
    Json(state.hub.get_all_queue_viewers(identity.tenant_id).await)
}
