use crate::tests::{connect, received};
use crate::{
    Channel, Hub, HubSettings, Metrics, PresenceDomain, ReportViewerPayload, ShutdownCoordinator,
};

use tokio::time::{Duration, advance, sleep, timeout};

#[tokio::test(start_paused = true)]
async fn given_stale_presence_when_swept_then_removed_and_left_broadcast() {
    // Given
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    let _ = observer.drain();

    // When - no heartbeat for longer than the threshold
    advance(Duration::from_secs(61)).await;
    let removed = hub.sweep_stale().await;

    // Then
    assert_eq!(removed, 1);
    let messages = received(&mut observer);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message_type, "viewer-left");
    assert_eq!(
        messages[0]
            .payload_as::<ReportViewerPayload>()
            .unwrap()
            .report_id,
        5
    );
    assert!(
        hub.presence_of(1, PresenceDomain::Reports, 10)
            .await
            .is_none()
    );
}

#[tokio::test(start_paused = true)]
async fn given_fresh_presence_when_swept_then_kept() {
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    let _ = observer.drain();

    advance(Duration::from_secs(30)).await;
    let removed = hub.sweep_stale().await;

    assert_eq!(removed, 0);
    assert!(observer.drain().is_empty());
}

#[tokio::test(start_paused = true)]
async fn given_regular_heartbeats_when_swept_then_never_expired() {
    let hub = Hub::default();
    let _observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;

    advance(Duration::from_secs(40)).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    advance(Duration::from_secs(40)).await;

    assert_eq!(hub.sweep_stale().await, 0);
}

#[tokio::test(start_paused = true)]
async fn given_stale_presence_in_both_domains_when_swept_then_both_removed() {
    let hub = Hub::default();
    let mut reports = connect(&hub, 1, 20, Channel::Reports).await;
    let mut queue = connect(&hub, 1, 21, Channel::Queue).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    hub.update_queue_presence(1, 10, "Ada", 8).await;
    let _ = reports.drain();
    let _ = queue.drain();

    advance(Duration::from_secs(61)).await;
    let removed = hub.sweep_stale().await;

    assert_eq!(removed, 2);
    assert_eq!(received(&mut reports)[0].message_type, "viewer-left");
    assert_eq!(received(&mut queue)[0].message_type, "queue-viewer-left");
}

#[tokio::test(start_paused = true)]
async fn given_running_sweeper_when_threshold_passes_then_presence_expires_without_heartbeat() {
    // Given
    let hub = Hub::default();
    let shutdown = ShutdownCoordinator::new();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    let _ = observer.drain();

    // When - ticks at 0s, 60s (age exactly 60s, kept) and 120s (expired)
    let task = hub.start_sweeper(&shutdown).unwrap();
    sleep(Duration::from_secs(125)).await;

    // Then
    assert_eq!(received(&mut observer).len(), 1);
    assert!(
        hub.presence_of(1, PresenceDomain::Reports, 10)
            .await
            .is_none()
    );

    shutdown.shutdown();
    assert!(timeout(Duration::from_secs(1), task).await.is_ok());
}

#[tokio::test]
async fn given_started_sweeper_when_started_again_then_none() {
    let hub = Hub::default();
    let shutdown = ShutdownCoordinator::new();

    let first = hub.start_sweeper(&shutdown);
    let second = hub.clone().start_sweeper(&shutdown);

    assert!(first.is_some());
    assert!(second.is_none());
    shutdown.shutdown();
}

#[tokio::test(start_paused = true)]
async fn given_custom_threshold_when_swept_then_threshold_respected() {
    let hub = Hub::new(
        HubSettings {
            stale_after: Duration::from_secs(10),
            ..Default::default()
        },
        Metrics::new(),
    );
    let _observer = connect(&hub, 1, 20, Channel::Queue).await;
    hub.update_queue_presence(1, 10, "Ada", 5).await;

    advance(Duration::from_secs(11)).await;

    assert_eq!(hub.sweep_stale().await, 1);
}
