use mh_hub::{Hub, ShutdownCoordinator};

use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub hub: Hub,
    pub shutdown: ShutdownCoordinator,
    /// Keep-alive comment interval on event streams
    pub keep_alive: Duration,
    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(hub: Hub, shutdown: ShutdownCoordinator, keep_alive: Duration) -> Self {
        Self {
            hub,
            shutdown,
            keep_alive,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
