use crate::client::Delivery;
use crate::{
    Channel, Client, ClientId, ItemId, ItemViewers, PresenceDomain, PresenceEvent, TenantId,
    UserId, ViewerInfo, ViewerPresence,
};

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use bytes::Bytes;
use log::debug;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// All hub state for one tenant, guarded by its own lock
pub(crate) struct TenantHub {
    tenant_id: TenantId,
    pub(crate) state: RwLock<TenantState>,
}

impl TenantHub {
    pub(crate) fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            state: RwLock::new(TenantState::default()),
        }
    }

    pub(crate) fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// Outcome of one fan-out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FanOut {
    pub delivered: usize,
    pub dropped: usize,
}

#[derive(Default)]
pub(crate) struct TenantState {
    pub(crate) clients: HashMap<ClientId, Client>,
    presence: HashMap<UserId, ViewerPresence>,
    queue_presence: HashMap<UserId, ViewerPresence>,
}

impl TenantState {
    fn presence_map(&self, domain: PresenceDomain) -> &HashMap<UserId, ViewerPresence> {
        match domain {
            PresenceDomain::Reports => &self.presence,
            PresenceDomain::Queue => &self.queue_presence,
        }
    }

    fn presence_map_mut(&mut self, domain: PresenceDomain) -> &mut HashMap<UserId, ViewerPresence> {
        match domain {
            PresenceDomain::Reports => &mut self.presence,
            PresenceDomain::Queue => &mut self.queue_presence,
        }
    }

    /// Enqueue `message` for every client on `channel`. Full or closed
    /// outboxes lose this message; other clients are unaffected.
    pub(crate) fn fan_out(&self, channel: Channel, message: &Bytes) -> FanOut {
        let mut outcome = FanOut::default();

        for client in self.clients.values().filter(|c| c.channel() == channel) {
            match client.try_deliver(message.clone()) {
                Delivery::Queued => outcome.delivered += 1,
                Delivery::Full => {
                    debug!(
                        "Outbox full for client {} (user {}), message dropped",
                        client.id(),
                        client.user_id()
                    );
                    outcome.dropped += 1;
                }
                Delivery::Closed => {
                    debug!(
                        "Outbox closed for client {} (user {}), message dropped",
                        client.id(),
                        client.user_id()
                    );
                    outcome.dropped += 1;
                }
            }
        }

        outcome
    }

    /// Apply one heartbeat and return the events to announce, in order.
    ///
    /// Switching items emits left(old) before joined(new). `item_id == 0`
    /// removes the entry. Repeated heartbeats on the same item only refresh
    /// `last_seen`.
    pub(crate) fn presence_heartbeat(
        &mut self,
        domain: PresenceDomain,
        user_id: UserId,
        user_name: &str,
        item_id: ItemId,
        now: Instant,
    ) -> Vec<PresenceEvent> {
        let map = self.presence_map_mut(domain);
        let mut events = Vec::new();

        let previous = map.get(&user_id);
        let is_new = match previous {
            Some(prev) => prev.item_id != item_id || !prev.announced,
            None => true,
        };

        if let Some(prev) = previous
            && prev.item_id != item_id
            && prev.announced
        {
            events.push(PresenceEvent::left(domain, prev));
        }

        if item_id == 0 {
            map.remove(&user_id);
            return events;
        }

        let presence = ViewerPresence {
            user_id,
            user_name: user_name.to_string(),
            item_id,
            last_seen: now,
            announced: true,
        };

        if is_new {
            events.push(PresenceEvent::joined(domain, &presence));
        }

        map.insert(user_id, presence);
        events
    }

    /// Remove an announced entry for `user_id`, returning its leave event
    pub(crate) fn clear_announced(
        &mut self,
        domain: PresenceDomain,
        user_id: UserId,
    ) -> Option<PresenceEvent> {
        let map = self.presence_map_mut(domain);

        if !map.get(&user_id).is_some_and(|p| p.announced) {
            return None;
        }

        let presence = map.remove(&user_id)?;
        Some(PresenceEvent::left(domain, &presence))
    }

    /// Remove every entry not refreshed within `threshold`
    pub(crate) fn expire_stale(
        &mut self,
        domain: PresenceDomain,
        now: Instant,
        threshold: Duration,
    ) -> Vec<ViewerPresence> {
        let map = self.presence_map_mut(domain);

        let stale: Vec<UserId> = map
            .values()
            .filter(|p| p.is_stale(now, threshold))
            .map(|p| p.user_id)
            .collect();

        stale
            .into_iter()
            .filter_map(|user_id| map.remove(&user_id))
            .collect()
    }

    pub(crate) fn presence_of(
        &self,
        domain: PresenceDomain,
        user_id: UserId,
    ) -> Option<ViewerPresence> {
        self.presence_map(domain).get(&user_id).cloned()
    }

    /// Announced viewers grouped by item, ordered by item id then user id
    pub(crate) fn viewers(&self, domain: PresenceDomain) -> Vec<ItemViewers> {
        let mut by_item: BTreeMap<ItemId, Vec<ViewerInfo>> = BTreeMap::new();

        for presence in self.presence_map(domain).values().filter(|p| p.announced) {
            by_item.entry(presence.item_id).or_default().push(ViewerInfo {
                user_id: presence.user_id,
                user_name: presence.user_name.clone(),
            });
        }

        by_item
            .into_iter()
            .map(|(item_id, mut viewers)| {
                viewers.sort_by_key(|v| v.user_id);
                ItemViewers { item_id, viewers }
            })
            .collect()
    }
}
