use crate::ShutdownCoordinator;

use tokio::sync::watch;

/// Helper for gracefully handling shutdown in async tasks.
///
/// Guards created after shutdown has been triggered complete immediately.
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for shutdown signal. Also returns if the coordinator is gone.
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.wait_for(|stopped| *stopped).await;
    }

    /// Check for shutdown without waiting
    pub fn poll_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
