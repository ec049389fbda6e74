//! Server-sent event stream: one hub client per open connection

use crate::{ApiError, ApiResult, AppState, Identity};

use mh_hub::{Channel, Hub, Outbox, ShutdownGuard};

use std::convert::Infallible;
use std::panic::Location;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use error_location::ErrorLocation;
use futures::{Stream, stream};
use log::{debug, info};

/// GET /api/v1/events/{channel}
pub async fn stream_events(
    State(state): State<AppState>,
    identity: Identity,
    Path(channel): Path<String>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let channel: Channel = channel
        .parse()
        .map_err(|_| ApiError::validation(format!("Unknown channel '{}'", channel), "channel"))?;

    if state.shutdown.is_shutdown() {
        return Err(ApiError::Unavailable {
            message: "Server is shutting down".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let (client, outbox) = state.hub.new_client(
        identity.tenant_id,
        identity.user_id,
        identity.user_name,
        channel,
    );
    state.hub.register(client).await;

    info!(
        "Event stream opened: tenant {}, user {}, channel {}",
        identity.tenant_id, identity.user_id, channel
    );

    let subscription = Subscription {
        hub: state.hub.clone(),
        outbox,
        shutdown: state.shutdown.subscribe_guard(),
    };

    Ok(Sse::new(events(subscription)).keep_alive(KeepAlive::new().interval(state.keep_alive)))
}

fn events(subscription: Subscription) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(subscription, |mut sub| async move {
        let message = tokio::select! {
            message = sub.outbox.recv() => message,
            _ = sub.shutdown.wait() => None,
        }?;

        let data = String::from_utf8_lossy(&message).into_owned();
        Some((Ok(Event::default().data(data)), sub))
    })
}

/// Owns the outbox for the lifetime of the response stream. Dropping it
/// (client disconnect, shutdown, or end of stream) unregisters the client.
struct Subscription {
    hub: Hub,
    outbox: Outbox,
    shutdown: ShutdownGuard,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let handle = self.outbox.handle();
        debug!(
            "Event stream closed: tenant {}, user {}, client {}",
            handle.tenant_id, handle.user_id, handle.client_id
        );

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let hub = self.hub.clone();
        runtime.spawn(async move {
            hub.unregister(&handle).await;
        });
    }
}
