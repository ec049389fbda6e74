pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    events::stream_events,
    extractors::identity::Identity,
    presence::{queue_presence, report_presence},
    presence_request::PresenceRequest,
    viewers::{queue_viewers, report_viewers},
};
pub use app_state::AppState;
pub use routes::build_router;
