//! Comment record model

use crate::moderation::ModerationAction;
use crate::types::{ArticleId, CommentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-submitted comment as the dashboard sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Unique comment identifier
    pub id: CommentId,
    /// Article the comment was submitted to
    pub article_id: ArticleId,
    /// Display name of the author
    pub author_name: String,
    /// Comment body
    pub text: String,
    /// Summary toxicity score from the automated scorer, 0.0..=1.0
    pub summary_score: Option<f32>,
    /// Category tags assigned to the comment
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the comment was submitted
    pub sent_at: DateTime<Utc>,
    /// When the record was last updated locally
    pub updated_at: DateTime<Utc>,
    /// Moderation flags, updated optimistically by the dispatcher
    #[serde(default)]
    pub flags: ModerationFlags,
}

impl CommentRecord {
    /// Create a new unmoderated record
    pub fn new(
        id: CommentId,
        article_id: ArticleId,
        author_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            article_id,
            author_name: author_name.into(),
            text: text.into(),
            summary_score: None,
            tags: Vec::new(),
            sent_at: now,
            updated_at: now,
            flags: ModerationFlags::default(),
        }
    }

    /// Set the moderation flags for one action and refresh `updated_at`
    pub fn apply_action(&mut self, action: ModerationAction) {
        self.flags.apply_action(action);
        self.updated_at = Utc::now();
    }

    /// Add a category tag
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
            self.updated_at = Utc::now();
        }
    }

    /// Remove a category tag
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }
}

/// The per-comment moderation outcome flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationFlags {
    /// Some(true) = accepted, Some(false) = rejected, None = undecided
    pub is_accepted: Option<bool>,
    /// Set aside for a later decision
    pub is_deferred: bool,
    /// Featured by a moderator
    pub is_highlighted: bool,
    /// Whether any moderation decision applies
    pub is_moderated: bool,
}

impl ModerationFlags {
    /// Set the flags for one moderation action
    pub fn apply_action(&mut self, action: ModerationAction) {
        match action {
            ModerationAction::Approve => {
                self.is_accepted = Some(true);
                self.is_deferred = false;
                self.is_highlighted = false;
                self.is_moderated = true;
            }
            ModerationAction::Reject => {
                self.is_accepted = Some(false);
                self.is_deferred = false;
                self.is_highlighted = false;
                self.is_moderated = true;
            }
            ModerationAction::Defer => {
                self.is_accepted = None;
                self.is_deferred = true;
                self.is_highlighted = false;
                self.is_moderated = true;
            }
            ModerationAction::Highlight => {
                self.is_accepted = Some(true);
                self.is_deferred = false;
                self.is_highlighted = true;
                self.is_moderated = true;
            }
            ModerationAction::Reset => {
                *self = ModerationFlags::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> CommentRecord {
        CommentRecord::new(
            CommentId::from_string("c1"),
            ArticleId::from_string("a1"),
            "reader",
            "This is fine.",
        )
    }

    #[test]
    fn test_new_record_is_unmoderated() {
        let record = create_test_record();
        assert_eq!(record.flags, ModerationFlags::default());
        assert!(!record.flags.is_moderated);
    }

    #[test]
    fn test_approve_sets_accepted() {
        let mut record = create_test_record();
        record.apply_action(ModerationAction::Approve);
        assert_eq!(record.flags.is_accepted, Some(true));
        assert!(record.flags.is_moderated);
    }

    #[test]
    fn test_highlight_implies_accepted() {
        let mut record = create_test_record();
        record.apply_action(ModerationAction::Highlight);
        assert!(record.flags.is_highlighted);
        assert_eq!(record.flags.is_accepted, Some(true));
    }

    #[test]
    fn test_approve_clears_highlight() {
        // Approving a highlighted comment demotes it to plain approved,
        // matching the bucket membership after the same transition
        let mut record = create_test_record();
        record.apply_action(ModerationAction::Highlight);
        record.apply_action(ModerationAction::Approve);
        assert!(!record.flags.is_highlighted);
        assert_eq!(record.flags.is_accepted, Some(true));
    }

    #[test]
    fn test_reject_clears_highlight() {
        let mut record = create_test_record();
        record.apply_action(ModerationAction::Highlight);
        record.apply_action(ModerationAction::Reject);
        assert!(!record.flags.is_highlighted);
        assert_eq!(record.flags.is_accepted, Some(false));
    }

    #[test]
    fn test_reset_clears_all_flags() {
        let mut record = create_test_record();
        record.apply_action(ModerationAction::Defer);
        record.apply_action(ModerationAction::Reset);
        assert_eq!(record.flags, ModerationFlags::default());
    }

    #[test]
    fn test_tags() {
        let mut record = create_test_record();
        record.add_tag("obscene");
        assert!(record.tags.contains(&"obscene".to_string()));

        record.add_tag("obscene"); // Duplicate
        assert_eq!(record.tags.iter().filter(|t| *t == "obscene").count(), 1);

        assert!(record.remove_tag("obscene"));
        assert!(!record.tags.contains(&"obscene".to_string()));
    }

    #[test]
    fn test_record_serialization() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let record2: CommentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, record2);
    }
}
