pub mod error;
pub mod events;
pub mod extractors;
pub mod presence;
pub mod presence_request;
pub mod viewers;
