pub mod channel;
pub mod client;
pub mod client_handle;
pub mod client_id;
pub mod error;
pub mod hub;
pub mod hub_message;
pub mod hub_settings;
pub mod item_viewers;
pub mod message_type;
pub mod metrics;
pub mod outbox;
pub mod payloads;
pub mod presence_domain;
pub mod presence_event;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
mod sweeper;
mod tenant_hub;
pub mod viewer_presence;

pub use channel::Channel;
pub use client::Client;
pub use client_handle::ClientHandle;
pub use client_id::ClientId;
pub use error::{HubError, Result};
pub use hub::Hub;
pub use hub_message::HubMessage;
pub use hub_settings::HubSettings;
pub use item_viewers::{ItemViewers, ViewerInfo};
pub use message_type::MessageType;
pub use self::metrics::Metrics;
pub use outbox::Outbox;
pub use payloads::{
    PostEventPayload, QueueViewerPayload, ReportEventPayload, ReportViewerPayload, ViewerPayload,
};
pub use presence_domain::PresenceDomain;
pub use presence_event::{PresenceEvent, PresenceTransition};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use viewer_presence::ViewerPresence;

#[cfg(test)]
mod tests;

/// Tenant identifier as supplied by the tenant-resolution middleware.
pub type TenantId = i64;

/// Staff user identifier.
pub type UserId = i64;

/// Report or post identifier. `0` means "not viewing anything".
pub type ItemId = i64;
