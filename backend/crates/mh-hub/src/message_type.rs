use crate::{Channel, HubError};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Closed set of event types pushed to staff clients.
///
/// Every type belongs to exactly one [`Channel`]; the mapping is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    NewReport,
    ReportAssigned,
    ReportUnassigned,
    ReportResolved,
    ViewerJoined,
    ViewerLeft,
    PostNew,
    PostTagged,
    QueueViewerJoined,
    QueueViewerLeft,
}

impl MessageType {
    pub const ALL: [MessageType; 10] = [
        MessageType::NewReport,
        MessageType::ReportAssigned,
        MessageType::ReportUnassigned,
        MessageType::ReportResolved,
        MessageType::ViewerJoined,
        MessageType::ViewerLeft,
        MessageType::PostNew,
        MessageType::PostTagged,
        MessageType::QueueViewerJoined,
        MessageType::QueueViewerLeft,
    ];

    /// Wire name, as it appears in the `type` field of the envelope
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::NewReport => "new-report",
            MessageType::ReportAssigned => "report-assigned",
            MessageType::ReportUnassigned => "report-unassigned",
            MessageType::ReportResolved => "report-resolved",
            MessageType::ViewerJoined => "viewer-joined",
            MessageType::ViewerLeft => "viewer-left",
            MessageType::PostNew => "post-new",
            MessageType::PostTagged => "post-tagged",
            MessageType::QueueViewerJoined => "queue-viewer-joined",
            MessageType::QueueViewerLeft => "queue-viewer-left",
        }
    }

    /// Channel whose subscribers receive this type
    pub fn channel(&self) -> Channel {
        match self {
            MessageType::NewReport
            | MessageType::ReportAssigned
            | MessageType::ReportUnassigned
            | MessageType::ReportResolved
            | MessageType::ViewerJoined
            | MessageType::ViewerLeft => Channel::Reports,
            MessageType::PostNew
            | MessageType::PostTagged
            | MessageType::QueueViewerJoined
            | MessageType::QueueViewerLeft => Channel::Queue,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = HubError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HubError::UnknownMessageType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
