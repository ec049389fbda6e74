use crate::HubError;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Logical broadcast topic a client subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Reports review screen
    Reports,
    /// Post moderation queue screen
    Queue,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Reports, Channel::Queue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Reports => "reports",
            Channel::Queue => "queue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = HubError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reports" => Ok(Channel::Reports),
            "queue" => Ok(Channel::Queue),
            _ => Err(HubError::UnknownChannel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
