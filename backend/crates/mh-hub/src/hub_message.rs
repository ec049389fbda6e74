use crate::{HubError, Result as HubErrorResult};

use std::panic::Location;

use bytes::Bytes;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Wire envelope: `{"type": <string>, "payload": <object>}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HubMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub payload: serde_json::Value,
}

#[derive(Serialize)]
struct Envelope<'a, P: Serialize + ?Sized> {
    #[serde(rename = "type")]
    message_type: &'a str,
    payload: &'a P,
}

impl HubMessage {
    /// Serialize an event once; the returned bytes are shared by every recipient.
    #[track_caller]
    pub fn encode<P: Serialize + ?Sized>(message_type: &str, payload: &P) -> HubErrorResult<Bytes> {
        let json = serde_json::to_vec(&Envelope {
            message_type,
            payload,
        })?;
        Ok(Bytes::from(json))
    }

    /// Parse a delivered message (used by consumers and tests)
    #[track_caller]
    pub fn decode(bytes: &[u8]) -> HubErrorResult<Self> {
        serde_json::from_slice(bytes).map_err(|source| HubError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Deserialize the payload into a concrete payload struct
    #[track_caller]
    pub fn payload_as<T: serde::de::DeserializeOwned>(&self) -> HubErrorResult<T> {
        serde_json::from_value(self.payload.clone()).map_err(|source| HubError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
