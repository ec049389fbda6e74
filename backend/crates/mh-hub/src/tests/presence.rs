use crate::tests::{connect, received, received_types};
use crate::{
    Channel, Hub, MessageType, PresenceDomain, QueueViewerPayload, ReportViewerPayload,
};

use std::sync::Arc;

use tokio::time::{Duration, Instant};

#[tokio::test]
async fn given_repeated_heartbeats_on_same_item_when_updated_then_joined_once() {
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;

    for _ in 0..3 {
        hub.update_presence(1, 10, "Ada", 5).await;
    }

    assert_eq!(received_types(&mut observer), vec!["viewer-joined"]);
    let presence = hub
        .presence_of(1, PresenceDomain::Reports, 10)
        .await
        .unwrap();
    assert!(presence.announced);
    assert_eq!(presence.item_id, 5);
}

#[tokio::test]
async fn given_viewer_on_item_when_switches_item_then_left_old_then_joined_new() {
    // Given
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    let _ = observer.drain();

    // When
    hub.update_presence(1, 10, "Ada", 7).await;

    // Then
    let messages = received(&mut observer);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message_type, "viewer-left");
    assert_eq!(
        messages[0].payload_as::<ReportViewerPayload>().unwrap(),
        ReportViewerPayload {
            report_id: 5,
            user_id: 10,
            user_name: "Ada".into()
        }
    );
    assert_eq!(messages[1].message_type, "viewer-joined");
    assert_eq!(
        messages[1]
            .payload_as::<ReportViewerPayload>()
            .unwrap()
            .report_id,
        7
    );
}

#[tokio::test]
async fn given_viewer_on_item_when_item_zero_then_left_and_entry_removed() {
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    let _ = observer.drain();

    hub.update_presence(1, 10, "Ada", 0).await;

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

#[tokio::test]
async fn given_no_presence_when_item_zero_then_nothing_broadcast() {
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;

    hub.update_presence(1, 10, "Ada", 0).await;

    assert!(observer.drain().is_empty());
    assert!(
        hub.presence_of(1, PresenceDomain::Reports, 10)
            .await
            .is_none()
    );
}

#[tokio::test]
async fn given_left_item_when_rejoined_then_joined_again() {
    let hub = Hub::default();
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;

    hub.update_presence(1, 10, "Ada", 5).await;
    hub.update_presence(1, 10, "Ada", 0).await;
    hub.update_presence(1, 10, "Ada", 5).await;

    assert_eq!(
        received_types(&mut observer),
        vec!["viewer-joined", "viewer-left", "viewer-joined"]
    );
}

#[tokio::test(start_paused = true)]
async fn given_viewer_when_heartbeat_repeats_then_last_seen_refreshed() {
    let hub = Hub::default();
    let _observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;

    tokio::time::advance(Duration::from_secs(30)).await;
    hub.update_presence(1, 10, "Ada", 5).await;

    let presence = hub
        .presence_of(1, PresenceDomain::Reports, 10)
        .await
        .unwrap();
    assert_eq!(presence.last_seen, Instant::now());
}

#[tokio::test]
async fn given_queue_heartbeat_when_updated_then_queue_channel_gets_queue_events() {
    let hub = Hub::default();
    let mut reports = connect(&hub, 1, 20, Channel::Reports).await;
    let mut queue = connect(&hub, 1, 21, Channel::Queue).await;

    hub.update_queue_presence(1, 10, "Ada", 12).await;

    assert!(reports.drain().is_empty());
    let messages = received(&mut queue);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].message_type,
        MessageType::QueueViewerJoined.as_str()
    );
    assert_eq!(
        messages[0].payload_as::<QueueViewerPayload>().unwrap(),
        QueueViewerPayload {
            post_id: 12,
            user_id: 10,
            user_name: "Ada".into()
        }
    );
}

#[tokio::test]
async fn given_same_user_in_both_domains_when_one_leaves_then_other_untouched() {
    let hub = Hub::default();
    let _observer = connect(&hub, 1, 20, Channel::Reports).await;
    hub.update_presence(1, 10, "Ada", 5).await;
    hub.update_queue_presence(1, 10, "Ada", 5).await;

    hub.update_queue_presence(1, 10, "Ada", 0).await;

    assert!(hub.presence_of(1, PresenceDomain::Queue, 10).await.is_none());
    assert!(
        hub.presence_of(1, PresenceDomain::Reports, 10)
            .await
            .is_some()
    );
}

#[tokio::test]
async fn given_no_tenant_hub_when_presence_updated_then_noop() {
    let hub = Hub::default();

    hub.update_presence(7, 10, "Ada", 5).await;

    assert_eq!(hub.tenant_count().await, 0);
    assert!(
        hub.presence_of(7, PresenceDomain::Reports, 10)
            .await
            .is_none()
    );
}

#[tokio::test]
async fn given_zero_ids_when_presence_updated_then_treated_as_valid_keys() {
    let hub = Hub::default();
    let mut observer = connect(&hub, 0, 0, Channel::Reports).await;

    hub.update_presence(0, 0, "", 3).await;

    assert_eq!(received_types(&mut observer), vec!["viewer-joined"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_duplicate_heartbeats_when_updated_then_joined_exactly_once() {
    // Given - the same user heartbeating from many tabs at once
    let hub = Arc::new(Hub::default());
    let mut observer = connect(&hub, 1, 20, Channel::Reports).await;

    // When
    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let hub = Arc::clone(&hub);
            tokio::spawn(async move { hub.update_presence(1, 10, "Ada", 5).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    // Then
    assert_eq!(received_types(&mut observer), vec!["viewer-joined"]);
}
