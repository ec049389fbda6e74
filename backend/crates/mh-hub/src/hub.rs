use crate::tenant_hub::{TenantHub, TenantState};
use crate::{
    Channel, Client, ClientHandle, HubMessage, HubSettings, ItemId, ItemViewers, MessageType,
    Metrics, Outbox, PresenceDomain, PresenceEvent, ShutdownCoordinator, TenantId, UserId,
    ViewerPresence, sweeper,
};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Real-time presence and broadcast hub for all tenants.
///
/// Cheap to clone; every clone shares the same state. Locks are always taken
/// outer (tenant map) before inner (one tenant), never the reverse.
pub struct Hub {
    tenants: Arc<RwLock<HashMap<TenantId, Arc<TenantHub>>>>,
    settings: HubSettings,
    metrics: Metrics,
    sweeper_started: Arc<AtomicBool>,
}

impl Hub {
    pub fn new(settings: HubSettings, metrics: Metrics) -> Self {
        Self {
            tenants: Arc::new(RwLock::new(HashMap::new())),
            settings,
            metrics,
            sweeper_started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a client sized with the configured outbox capacity
    pub fn new_client(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        user_name: impl Into<String>,
        channel: Channel,
    ) -> (Client, Outbox) {
        Client::new(
            tenant_id,
            user_id,
            user_name,
            channel,
            self.settings.outbox_capacity,
        )
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Add a client to its tenant, creating the tenant hub on first use
    pub async fn register(&self, client: Client) {
        let handle = client.handle();
        let channel = client.channel();

        // Outer lock is held until the client is inserted so a concurrent
        // prune cannot remove the tenant hub in between.
        let mut tenants = self.tenants.write().await;
        let tenant = Arc::clone(tenants.entry(handle.tenant_id).or_insert_with(|| {
            info!("Created hub for tenant {}", handle.tenant_id);
            self.metrics.tenant_created();
            Arc::new(TenantHub::new(handle.tenant_id))
        }));

        let mut state = tenant.state.write().await;
        state.clients.insert(handle.client_id, client);
        let total = state.clients.len();
        drop(state);
        drop(tenants);

        self.metrics.client_registered(channel);
        info!(
            "Registered client {} for tenant {} (user {}, channel {}, {} total)",
            handle.client_id, handle.tenant_id, handle.user_id, channel, total
        );
    }

    /// Remove a client and close its outbox. Unknown or already removed
    /// clients are ignored.
    ///
    /// Only the reports presence entry of the user is cleared here; queue
    /// presence expires through an explicit leave or the sweep.
    pub async fn unregister(&self, handle: &ClientHandle) {
        let Some(tenant) = self.tenant(handle.tenant_id).await else {
            debug!(
                "Unregister for client {} ignored, no hub for tenant {}",
                handle.client_id, handle.tenant_id
            );
            return;
        };

        let remaining = {
            let mut state = tenant.state.write().await;

            let Some(client) = state.clients.remove(&handle.client_id) else {
                debug!("Client {} already unregistered", handle.client_id);
                return;
            };
            let channel = client.channel();
            // Dropping the only sender closes the outbox
            drop(client);
            self.metrics.client_unregistered(channel);

            if let Some(event) = state.clear_announced(PresenceDomain::Reports, handle.user_id) {
                self.publish_presence(&state, &event);
            }

            state.clients.len()
        };

        info!(
            "Unregistered client {} for tenant {} ({} remaining)",
            handle.client_id, handle.tenant_id, remaining
        );

        if remaining == 0 {
            self.prune_if_empty(handle.tenant_id).await;
        }
    }

    /// Drop the tenant hub if it still has no clients
    async fn prune_if_empty(&self, tenant_id: TenantId) {
        let mut tenants = self.tenants.write().await;

        let Some(tenant) = tenants.get(&tenant_id).cloned() else {
            return;
        };

        // Re-check under the outer lock; a register may have raced us.
        let empty = tenant.state.read().await.clients.is_empty();
        if empty {
            tenants.remove(&tenant_id);
            self.metrics.tenant_pruned();
            info!("Removed empty hub for tenant {}", tenant.tenant_id());
        }
    }

    // =========================================================================
    // Broadcasting
    // =========================================================================

    /// Fire-and-forget publish to every client of the tenant on the
    /// message type's channel.
    ///
    /// Returns how many clients had the message queued. Never fails: a missing
    /// tenant, an unencodable payload, an unknown type and full outboxes all
    /// just mean fewer (or zero) deliveries.
    pub async fn broadcast_to_tenant<P: Serialize + ?Sized>(
        &self,
        tenant_id: TenantId,
        message_type: &str,
        payload: &P,
    ) -> usize {
        let Some(tenant) = self.tenant(tenant_id).await else {
            debug!("No hub for tenant {}, {} not broadcast", tenant_id, message_type);
            return 0;
        };

        let message = match HubMessage::encode(message_type, payload) {
            Ok(message) => message,
            Err(e) => {
                warn!("Dropping {} for tenant {}: {}", message_type, tenant_id, e);
                self.metrics.broadcast_discarded("encode");
                return 0;
            }
        };

        let channel = match message_type.parse::<MessageType>() {
            Ok(kind) => kind.channel(),
            Err(_) => {
                debug!("Unknown message type {}, delivered to nobody", message_type);
                self.metrics.broadcast_discarded("unknown_type");
                return 0;
            }
        };

        let state = tenant.state.read().await;
        let outcome = state.fan_out(channel, &message);
        drop(state);

        self.metrics
            .broadcast_published(message_type, outcome.delivered, outcome.dropped);
        debug!(
            "Broadcast {} to tenant {} ({} delivered, {} dropped)",
            message_type, tenant_id, outcome.delivered, outcome.dropped
        );

        outcome.delivered
    }

    /// Encode and fan out a presence event. Caller holds the tenant lock.
    fn publish_presence(&self, state: &TenantState, event: &PresenceEvent) {
        let message_type = event.message_type();

        let message = match HubMessage::encode(message_type.as_str(), &event.payload()) {
            Ok(message) => message,
            Err(e) => {
                warn!("Dropping {}: {}", message_type, e);
                self.metrics.broadcast_discarded("encode");
                return;
            }
        };

        let outcome = state.fan_out(message_type.channel(), &message);
        self.metrics.presence_changed(event.domain, event.transition);
        self.metrics
            .broadcast_published(message_type.as_str(), outcome.delivered, outcome.dropped);
        debug!(
            "{} item {} user {} ({} delivered, {} dropped)",
            message_type, event.item_id, event.user_id, outcome.delivered, outcome.dropped
        );
    }

    // =========================================================================
    // Presence
    // =========================================================================

    /// Heartbeat for the reports screen. `item_id == 0` means stopped viewing.
    pub async fn update_presence(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        user_name: &str,
        item_id: ItemId,
    ) {
        self.heartbeat(PresenceDomain::Reports, tenant_id, user_id, user_name, item_id)
            .await;
    }

    /// Heartbeat for the post queue screen. `item_id == 0` means stopped viewing.
    pub async fn update_queue_presence(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        user_name: &str,
        item_id: ItemId,
    ) {
        self.heartbeat(PresenceDomain::Queue, tenant_id, user_id, user_name, item_id)
            .await;
    }

    /// Shared presence state machine. Transitions for a tenant are serialized
    /// by its write lock, and their events are queued before it is released.
    pub async fn heartbeat(
        &self,
        domain: PresenceDomain,
        tenant_id: TenantId,
        user_id: UserId,
        user_name: &str,
        item_id: ItemId,
    ) {
        let Some(tenant) = self.tenant(tenant_id).await else {
            debug!(
                "No hub for tenant {}, {} presence of user {} ignored",
                tenant_id, domain, user_id
            );
            return;
        };

        let mut state = tenant.state.write().await;
        let events = state.presence_heartbeat(domain, user_id, user_name, item_id, Instant::now());

        for event in &events {
            self.publish_presence(&state, event);
        }
    }

    // =========================================================================
    // Viewer queries
    // =========================================================================

    /// Snapshot of announced reports viewers, grouped by report
    pub async fn get_all_active_viewers(&self, tenant_id: TenantId) -> Vec<ItemViewers> {
        self.viewers(PresenceDomain::Reports, tenant_id).await
    }

    /// Snapshot of announced queue viewers, grouped by post
    pub async fn get_all_queue_viewers(&self, tenant_id: TenantId) -> Vec<ItemViewers> {
        self.viewers(PresenceDomain::Queue, tenant_id).await
    }

    pub async fn viewers(&self, domain: PresenceDomain, tenant_id: TenantId) -> Vec<ItemViewers> {
        match self.tenant(tenant_id).await {
            Some(tenant) => tenant.state.read().await.viewers(domain),
            None => Vec::new(),
        }
    }

    pub async fn presence_of(
        &self,
        tenant_id: TenantId,
        domain: PresenceDomain,
        user_id: UserId,
    ) -> Option<ViewerPresence> {
        let tenant = self.tenant(tenant_id).await?;
        let state = tenant.state.read().await;
        state.presence_of(domain, user_id)
    }

    // =========================================================================
    // Staleness sweep
    // =========================================================================

    /// Expire presence entries not refreshed within `stale_after`, announcing
    /// a leave for each announced one. Returns the number removed.
    pub async fn sweep_stale(&self) -> usize {
        let now = Instant::now();
        let tenants: Vec<Arc<TenantHub>> = self.tenants.read().await.values().cloned().collect();
        let mut removed = 0;

        for tenant in tenants {
            let mut state = tenant.state.write().await;

            for domain in PresenceDomain::ALL {
                let expired = state.expire_stale(domain, now, self.settings.stale_after);

                for presence in &expired {
                    info!(
                        "Expired stale {} presence of user {} on item {} (tenant {})",
                        domain,
                        presence.user_id,
                        presence.item_id,
                        tenant.tenant_id()
                    );
                    if presence.announced {
                        self.publish_presence(&state, &PresenceEvent::left(domain, presence));
                    }
                }

                removed += expired.len();
            }
        }

        if removed > 0 {
            self.metrics.presence_swept(removed);
        }

        removed
    }

    /// Spawn the background sweep. Only the first call starts a task; later
    /// calls return `None`. The task stops when `shutdown` fires.
    pub fn start_sweeper(&self, shutdown: &ShutdownCoordinator) -> Option<JoinHandle<()>> {
        if self.sweeper_started.swap(true, Ordering::SeqCst) {
            warn!("Presence sweeper already running");
            return None;
        }

        let hub = self.clone();
        let guard = shutdown.subscribe_guard();
        let interval = self.settings.sweep_interval;

        info!("Starting presence sweeper (every {:?})", interval);
        Some(tokio::spawn(sweeper::run(hub, interval, guard)))
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of tenants with a live hub
    pub async fn tenant_count(&self) -> usize {
        self.tenants.read().await.len()
    }

    /// Number of registered clients for a tenant
    pub async fn client_count(&self, tenant_id: TenantId) -> usize {
        match self.tenant(tenant_id).await {
            Some(tenant) => tenant.state.read().await.clients.len(),
            None => 0,
        }
    }

    async fn tenant(&self, tenant_id: TenantId) -> Option<Arc<TenantHub>> {
        self.tenants.read().await.get(&tenant_id).cloned()
    }
}

impl Clone for Hub {
    fn clone(&self) -> Self {
        Self {
            tenants: Arc::clone(&self.tenants),
            settings: self.settings.clone(),
            metrics: self.metrics.clone(),
            sweeper_started: Arc::clone(&self.sweeper_started),
        }
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(HubSettings::default(), Metrics::new())
    }
}
