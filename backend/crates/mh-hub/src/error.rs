use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Unknown channel: {value} {location}")]
    UnknownChannel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown message type: {value} {location}")]
    UnknownMessageType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Message encode failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Message decode failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for HubError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
