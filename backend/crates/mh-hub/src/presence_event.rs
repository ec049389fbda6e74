use crate::{ItemId, MessageType, PresenceDomain, UserId, ViewerPayload, ViewerPresence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceTransition {
    Joined,
    Left,
}

/// A join or leave that must be announced to the domain's channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEvent {
    pub domain: PresenceDomain,
    pub transition: PresenceTransition,
    pub item_id: ItemId,
    pub user_id: UserId,
    pub user_name: String,
}

impl PresenceEvent {
    pub fn joined(domain: PresenceDomain, presence: &ViewerPresence) -> Self {
        Self::from_presence(domain, PresenceTransition::Joined, presence)
    }

    pub fn left(domain: PresenceDomain, presence: &ViewerPresence) -> Self {
        Self::from_presence(domain, PresenceTransition::Left, presence)
    }

    fn from_presence(
        domain: PresenceDomain,
        transition: PresenceTransition,
        presence: &ViewerPresence,
    ) -> Self {
        Self {
            domain,
            transition,
            item_id: presence.item_id,
            user_id: presence.user_id,
            user_name: presence.user_name.clone(),
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self.transition {
            PresenceTransition::Joined => self.domain.joined_type(),
            PresenceTransition::Left => self.domain.left_type(),
        }
    }

    pub fn payload(&self) -> ViewerPayload {
        self.domain.payload(self.item_id, self.user_id, &self.user_name)
    }
}
