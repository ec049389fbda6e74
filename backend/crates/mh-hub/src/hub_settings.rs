use mh_config::HubConfig;

use std::time::Duration;

/// Runtime settings for the hub
#[derive(Debug, Clone)]
pub struct HubSettings {
    /// Per-client outbox capacity (bounded; overflow is dropped)
    pub outbox_capacity: usize,
    /// Sweep task period
    pub sweep_interval: Duration,
    /// Presence entries older than this are expired by the sweep
    pub stale_after: Duration,
}

impl From<&HubConfig> for HubSettings {
    fn from(config: &HubConfig) -> Self {
        Self {
            outbox_capacity: config.outbox_capacity,
            sweep_interval: config.sweep_interval(),
            stale_after: config.stale_after(),
        }
    }
}

impl Default for HubSettings {
    fn default() -> Self {
        Self::from(&HubConfig::default())
    }
}
