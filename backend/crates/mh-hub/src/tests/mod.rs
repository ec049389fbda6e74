mod presence;
mod sweep;

use crate::{Channel, Hub, HubMessage, Outbox, TenantId, UserId};

/// Register a client on `channel` and return its outbox
pub(crate) async fn connect(
    hub: &Hub,
    tenant_id: TenantId,
    user_id: UserId,
    channel: Channel,
) -> Outbox {
    let (client, outbox) = hub.new_client(tenant_id, user_id, format!("user-{user_id}"), channel);
    hub.register(client).await;
    outbox
}

/// Decode everything currently queued in an outbox
pub(crate) fn received(outbox: &mut Outbox) -> Vec<HubMessage> {
    outbox
        .drain()
        .iter()
        .map(|bytes| HubMessage::decode(bytes).unwrap())
        .collect()
}

/// Message types currently queued, in order
pub(crate) fn received_types(outbox: &mut Outbox) -> Vec<String> {
    received(outbox)
        .into_iter()
        .map(|m| m.message_type)
        .collect()
}
