//! Label record as supplied by the label data source

use serde::{Deserialize, Serialize};

/// Unique identifier for a label (Gmail label ID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(pub String);

impl LabelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LabelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LabelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for LabelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who owns a label: Gmail itself or the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    System,
    #[default]
    User,
}

/// A label as reported by the label data source
///
/// Deserializes from either the plain shape (`unreadCount`, `totalCount`)
/// or a Gmail API label resource (`messagesUnread`, `messagesTotal`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    /// Label ID (e.g., "INBOX", "Label_123")
    pub id: LabelId,
    /// Slash-delimited hierarchical name (e.g., "Work/Clients/Acme")
    pub name: String,
    /// System or user label
    #[serde(default, rename = "type")]
    pub kind: LabelKind,
    /// Own unread count, descendants not included
    #[serde(default, alias = "messagesUnread")]
    pub unread_count: u32,
    /// Total number of messages with this label, when known
    #[serde(default, alias = "messagesTotal", skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

impl LabelRecord {
    /// Create a user label
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: LabelKind::User,
            unread_count: 0,
            total_count: None,
        }
    }

    /// Create a system label
    pub fn system(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            kind: LabelKind::System,
            ..Self::new(id, name)
        }
    }

    /// Builder method to set unread count
    pub fn with_unread_count(mut self, count: u32) -> Self {
        self.unread_count = count;
        self
    }

    /// Builder method to set total count
    pub fn with_total_count(mut self, count: u32) -> Self {
        self.total_count = Some(count);
        self
    }

    pub fn is_system(&self) -> bool {
        self.kind == LabelKind::System
    }
}

/// Response body of Gmail's `users.labels.list`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLabelsResponse {
    #[serde(default)]
    pub labels: Vec<LabelRecord>,
}
