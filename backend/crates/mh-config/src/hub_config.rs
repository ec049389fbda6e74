use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Per-client outbox capacity
pub const MIN_OUTBOX_CAPACITY: usize = 1;
pub const MAX_OUTBOX_CAPACITY: usize = 10000;
pub const DEFAULT_OUTBOX_CAPACITY: usize = 32;

// Presence sweep interval (seconds)
pub const MIN_SWEEP_INTERVAL_SECS: u64 = 1;
pub const MAX_SWEEP_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

// Presence staleness threshold (seconds)
pub const MIN_STALE_AFTER_SECS: u64 = 5;
pub const MAX_STALE_AFTER_SECS: u64 = 3600;
pub const DEFAULT_STALE_AFTER_SECS: u64 = 60;

// Event stream keep-alive comment interval (seconds)
pub const MIN_KEEP_ALIVE_SECS: u64 = 1;
pub const MAX_KEEP_ALIVE_SECS: u64 = 300;
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;

/// Broadcast hub and presence settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Pending messages buffered per client before drops start
    pub outbox_capacity: usize,
    /// How often the presence sweep runs
    pub sweep_interval_secs: u64,
    /// Presence entries not refreshed within this window are expired.
    /// Only presence heartbeats refresh an entry, so clients must heartbeat
    /// more often than this.
    pub stale_after_secs: u64,
    /// Keep-alive comment interval on event streams
    pub keep_alive_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            outbox_capacity: DEFAULT_OUTBOX_CAPACITY,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            stale_after_secs: DEFAULT_STALE_AFTER_SECS,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
        }
    }
}

impl HubConfig {
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }

    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.outbox_capacity < MIN_OUTBOX_CAPACITY || self.outbox_capacity > MAX_OUTBOX_CAPACITY
        {
            return Err(ConfigError::hub(format!(
                "hub.outbox_capacity must be {}-{}, got {}",
                MIN_OUTBOX_CAPACITY, MAX_OUTBOX_CAPACITY, self.outbox_capacity
            )));
        }

        if self.sweep_interval_secs < MIN_SWEEP_INTERVAL_SECS
            || self.sweep_interval_secs > MAX_SWEEP_INTERVAL_SECS
        {
            return Err(ConfigError::hub(format!(
                "hub.sweep_interval_secs must be {}-{}, got {}",
                MIN_SWEEP_INTERVAL_SECS, MAX_SWEEP_INTERVAL_SECS, self.sweep_interval_secs
            )));
        }

        if self.stale_after_secs < MIN_STALE_AFTER_SECS
            || self.stale_after_secs > MAX_STALE_AFTER_SECS
        {
            return Err(ConfigError::hub(format!(
                "hub.stale_after_secs must be {}-{}, got {}",
                MIN_STALE_AFTER_SECS, MAX_STALE_AFTER_SECS, self.stale_after_secs
            )));
        }

        if self.keep_alive_secs < MIN_KEEP_ALIVE_SECS || self.keep_alive_secs > MAX_KEEP_ALIVE_SECS
        {
            return Err(ConfigError::hub(format!(
                "hub.keep_alive_secs must be {}-{}, got {}",
                MIN_KEEP_ALIVE_SECS, MAX_KEEP_ALIVE_SECS, self.keep_alive_secs
            )));
        }

        Ok(())
    }
}
