use crate::{ItemId, UserId};

use std::time::Duration;

use tokio::time::Instant;

/// Which item one user is currently viewing within a presence domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerPresence {
    pub user_id: UserId,
    pub user_name: String,
    pub item_id: ItemId,
    /// Refreshed on every heartbeat
    pub last_seen: Instant,
    /// A joined event has been published for `item_id`
    pub announced: bool,
}

impl ViewerPresence {
    pub fn is_stale(&self, now: Instant, threshold: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > threshold
    }
}
