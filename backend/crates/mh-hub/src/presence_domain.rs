use crate::{
    Channel, ItemId, MessageType, QueueViewerPayload, ReportViewerPayload, UserId, ViewerPayload,
};

/// One of the two independent "who is viewing what" spaces.
///
/// Supplies the message names, target channel and payload shape so a single
/// presence state machine serves both screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceDomain {
    /// Reports review queue
    Reports,
    /// Post moderation queue
    Queue,
}

impl PresenceDomain {
    pub const ALL: [PresenceDomain; 2] = [PresenceDomain::Reports, PresenceDomain::Queue];

    pub fn joined_type(&self) -> MessageType {
        match self {
            PresenceDomain::Reports => MessageType::ViewerJoined,
            PresenceDomain::Queue => MessageType::QueueViewerJoined,
        }
    }

    pub fn left_type(&self) -> MessageType {
        match self {
            PresenceDomain::Reports => MessageType::ViewerLeft,
            PresenceDomain::Queue => MessageType::QueueViewerLeft,
        }
    }

    pub fn channel(&self) -> Channel {
        match self {
            PresenceDomain::Reports => Channel::Reports,
            PresenceDomain::Queue => Channel::Queue,
        }
    }

    pub fn payload(&self, item_id: ItemId, user_id: UserId, user_name: &str) -> ViewerPayload {
        match self {
            PresenceDomain::Reports => ViewerPayload::Report(ReportViewerPayload {
                report_id: item_id,
                user_id,
                user_name: user_name.to_string(),
            }),
            PresenceDomain::Queue => ViewerPayload::Queue(QueueViewerPayload {
                post_id: item_id,
                user_id,
                user_name: user_name.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceDomain::Reports => "reports",
            PresenceDomain::Queue => "queue",
        }
    }
}

impl std::fmt::Display for PresenceDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
