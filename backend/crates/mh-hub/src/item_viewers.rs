use crate::{ItemId, UserId};

use serde::{Deserialize, Serialize};

/// Everyone currently viewing one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemViewers {
    pub item_id: ItemId,
    pub viewers: Vec<ViewerInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerInfo {
    pub user_id: UserId,
    pub user_name: String,
}
