use crate::{Channel, PresenceDomain, PresenceTransition};

use metrics::{counter, gauge};

/// Metrics collector for hub operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "mh_hub" }
    }

    /// Record a client registration
    pub fn client_registered(&self, channel: Channel) {
        counter!(format!("{}.clients.registered", self.prefix)).increment(1);
        counter!(format!("{}.clients.registered.{}", self.prefix, channel)).increment(1);
        gauge!(format!("{}.clients.active", self.prefix)).increment(1.0);
    }

    /// Record a client leaving the hub
    pub fn client_unregistered(&self, channel: Channel) {
        counter!(format!("{}.clients.unregistered", self.prefix)).increment(1);
        counter!(format!("{}.clients.unregistered.{}", self.prefix, channel)).increment(1);
        gauge!(format!("{}.clients.active", self.prefix)).decrement(1.0);
    }

    pub fn tenant_created(&self) {
        gauge!(format!("{}.tenants.active", self.prefix)).increment(1.0);
    }

    pub fn tenant_pruned(&self) {
        counter!(format!("{}.tenants.pruned", self.prefix)).increment(1);
        gauge!(format!("{}.tenants.active", self.prefix)).decrement(1.0);
    }

    /// Record one fan-out of a message
    pub fn broadcast_published(&self, message_type: &str, delivered: usize, dropped: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.published.{}", self.prefix, message_type)).increment(1);
        counter!(format!("{}.messages.delivered", self.prefix)).increment(delivered as u64);
        if dropped > 0 {
            counter!(format!("{}.messages.dropped", self.prefix)).increment(dropped as u64);
        }
    }

    /// Broadcast that reached nobody (unknown type or unencodable payload)
    pub fn broadcast_discarded(&self, reason: &str) {
        counter!(format!("{}.broadcast.discarded.{}", self.prefix, reason)).increment(1);
    }

    pub fn presence_changed(&self, domain: PresenceDomain, transition: PresenceTransition) {
        let action = match transition {
            PresenceTransition::Joined => "joined",
            PresenceTransition::Left => "left",
        };
        counter!(format!("{}.presence.{}.{}", self.prefix, domain, action)).increment(1);
    }

    pub fn presence_swept(&self, count: usize) {
        counter!(format!("{}.presence.swept", self.prefix)).increment(count as u64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
