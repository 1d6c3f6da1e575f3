//! Moderation session model
//!
//! A session bundles the comment records and the moderation status store so
//! the CLI can persist dashboard state between invocations.

use crate::comment::CommentRecordStore;
use crate::moderation::ModerationStatusStore;
use crate::types::SessionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted moderation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationSession {
    /// Unique session identifier
    pub id: SessionId,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Local comment records
    #[serde(default)]
    pub comments: CommentRecordStore,
    /// Per-scope bucket membership
    #[serde(default)]
    pub statuses: ModerationStatusStore,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// When the session was last updated
    pub updated_at: DateTime<Utc>,
}

impl ModerationSession {
    /// Create a new empty session
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::generate(),
            name: None,
            comments: CommentRecordStore::new(),
            statuses: ModerationStatusStore::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a session with a specific ID
    pub fn with_id(id: SessionId) -> Self {
        let mut session = Self::new();
        session.id = id;
        session
    }

    /// Bump the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Lightweight listing info
    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            comment_count: self.comments.len(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Default for ModerationSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a stored session, for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub name: Option<String>,
    pub comment_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = ModerationSession::new();
        assert!(session.comments.is_empty());
        assert!(session.statuses.is_loading());
    }

    #[test]
    fn test_touch_updates_timestamp() {
        let mut session = ModerationSession::new();
        let old_updated = session.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(10));
        session.touch();
        assert!(session.updated_at > old_updated);
    }

    #[test]
    fn test_info() {
        let mut session = ModerationSession::new();
        session.name = Some("Front page sweep".to_string());

        let info = session.info();
        assert_eq!(info.id, session.id);
        assert_eq!(info.name.as_deref(), Some("Front page sweep"));
        assert_eq!(info.comment_count, 0);
    }

    #[test]
    fn test_session_serde_round_trip() {
        let session = ModerationSession::new();
        let json = serde_json::to_string(&session).unwrap();
        let restored: ModerationSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
