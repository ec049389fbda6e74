//! Background liveness sweep for presence entries.

use crate::{Hub, ShutdownGuard};

use std::time::Duration;

use log::{debug, info};
use tokio::time::{MissedTickBehavior, interval};

/// Run the sweep every `period` until shutdown.
///
/// Reclaims presence left behind by clients that vanished without an
/// explicit leave (closed tab, lost network).
pub(crate) async fn run(hub: Hub, period: Duration, mut shutdown: ShutdownGuard) {
    // interval() panics on a zero period
    let mut ticker = interval(period.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = hub.sweep_stale().await;
                if removed > 0 {
                    debug!("Presence sweep removed {} stale entries", removed);
                }
            }
            _ = shutdown.wait() => {
                info!("Presence sweeper stopped");
                break;
            }
        }
    }
}
