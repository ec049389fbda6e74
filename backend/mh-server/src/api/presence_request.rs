use mh_hub::ItemId;

use serde::Deserialize;

/// Presence heartbeat body; `itemId == 0` means "viewing nothing"
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRequest {
    pub item_id: ItemId,
}
