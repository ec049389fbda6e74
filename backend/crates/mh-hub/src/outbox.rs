use crate::{Channel, ClientHandle};

use bytes::Bytes;
use tokio::sync::mpsc;

/// Receiving half of a client's bounded message queue, drained by the transport.
///
/// Yields pre-serialized JSON envelopes in FIFO order. Ends (returns `None`)
/// once the client has been unregistered and the buffer is drained.
#[derive(Debug)]
pub struct Outbox {
    handle: ClientHandle,
    channel: Channel,
    receiver: mpsc::Receiver<Bytes>,
}

impl Outbox {
    pub(crate) fn new(
        handle: ClientHandle,
        channel: Channel,
        receiver: mpsc::Receiver<Bytes>,
    ) -> Self {
        Self {
            handle,
            channel,
            receiver,
        }
    }

    pub fn handle(&self) -> ClientHandle {
        self.handle
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Wait for the next message
    pub async fn recv(&mut self) -> Option<Bytes> {
        self.receiver.recv().await
    }

    /// Take the next message if one is already queued
    pub fn try_recv(&mut self) -> Option<Bytes> {
        self.receiver.try_recv().ok()
    }

    /// Number of queued, undelivered messages
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Whether the hub has released this client
    pub fn is_closed(&self) -> bool {
        self.receiver.is_closed()
    }

    /// Drain everything queued right now
    pub fn drain(&mut self) -> Vec<Bytes> {
        let mut messages = Vec::with_capacity(self.len());
        while let Some(message) = self.try_recv() {
            messages.push(message);
        }
        messages
    }
}
