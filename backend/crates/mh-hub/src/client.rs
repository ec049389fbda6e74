use crate::{Channel, ClientHandle, ClientId, Outbox, TenantId, UserId};

use bytes::Bytes;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Result of a non-blocking enqueue onto a client's outbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    Queued,
    /// Outbox at capacity; message dropped for this client
    Full,
    /// Transport already stopped draining
    Closed,
}

/// A registered subscriber.
///
/// Created together with its [`Outbox`]. The hub takes ownership of the
/// `Client` on register and holds the only sender, so dropping it on
/// unregister closes the outbox.
#[derive(Debug)]
pub struct Client {
    handle: ClientHandle,
    user_name: String,
    channel: Channel,
    sender: mpsc::Sender<Bytes>,
}

impl Client {
    pub fn new(
        tenant_id: TenantId,
        user_id: UserId,
        user_name: impl Into<String>,
        channel: Channel,
        capacity: usize,
    ) -> (Client, Outbox) {
        let handle = ClientHandle {
            client_id: ClientId::new(),
            tenant_id,
            user_id,
        };
        // mpsc::channel panics on zero capacity
        let (sender, receiver) = mpsc::channel(capacity.max(1));

        let client = Client {
            handle,
            user_name: user_name.into(),
            channel,
            sender,
        };

        (client, Outbox::new(handle, channel, receiver))
    }

    pub fn handle(&self) -> ClientHandle {
        self.handle
    }

    pub fn id(&self) -> ClientId {
        self.handle.client_id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.handle.tenant_id
    }

    pub fn user_id(&self) -> UserId {
        self.handle.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Enqueue without waiting. Never blocks the broadcaster.
    pub(crate) fn try_deliver(&self, message: Bytes) -> Delivery {
        match self.sender.try_send(message) {
            Ok(()) => Delivery::Queued,
            Err(TrySendError::Full(_)) => Delivery::Full,
            Err(TrySendError::Closed(_)) => Delivery::Closed,
        }
    }
}
