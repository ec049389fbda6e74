//! Payload shapes carried in the `payload` field of each event.

use crate::{ItemId, UserId};

use serde::{Deserialize, Serialize};

/// new-report, report-assigned, report-unassigned, report-resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEventPayload {
    pub report_id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
}

impl ReportEventPayload {
    pub fn new(report_id: ItemId) -> Self {
        Self {
            report_id,
            assigned_to_id: None,
            assigned_to_name: None,
        }
    }

    pub fn assigned(report_id: ItemId, user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            report_id,
            assigned_to_id: Some(user_id),
            assigned_to_name: Some(user_name.into()),
        }
    }
}

/// post-new, post-tagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEventPayload {
    pub post_id: ItemId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// viewer-joined, viewer-left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportViewerPayload {
    pub report_id: ItemId,
    pub user_id: UserId,
    pub user_name: String,
}

/// queue-viewer-joined, queue-viewer-left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueViewerPayload {
    pub post_id: ItemId,
    pub user_id: UserId,
    pub user_name: String,
}

/// Viewer payload for either presence domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViewerPayload {
    Report(ReportViewerPayload),
    Queue(QueueViewerPayload),
}
