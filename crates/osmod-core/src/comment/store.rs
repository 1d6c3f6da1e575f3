//! Local comment record store

use super::model::{CommentRecord, ModerationFlags};
use crate::error::{OsmodError, Result};
use crate::moderation::ModerationAction;
use crate::types::{ArticleId, CommentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keyed store of comment records.
///
/// Holds the local copies the dashboard renders; the dispatcher mutates
/// their moderation flags optimistically and restores them when the remote
/// call fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentRecordStore {
    /// All records by ID
    comments: HashMap<CommentId, CommentRecord>,
}

impl CommentRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record
    pub fn add(&mut self, record: CommentRecord) -> Result<CommentId> {
        let id = record.id.clone();
        if self.comments.contains_key(&id) {
            return Err(OsmodError::Validation(format!(
                "Comment with ID {} already exists",
                id
            )));
        }
        self.comments.insert(id.clone(), record);
        Ok(id)
    }

    /// Get a record by ID
    pub fn get(&self, id: &CommentId) -> Option<&CommentRecord> {
        self.comments.get(id)
    }

    /// Get a mutable record by ID
    pub fn get_mut(&mut self, id: &CommentId) -> Option<&mut CommentRecord> {
        self.comments.get_mut(id)
    }

    /// Remove a record
    pub fn remove(&mut self, id: &CommentId) -> Result<CommentRecord> {
        self.comments
            .remove(id)
            .ok_or_else(|| OsmodError::CommentNotFound(id.to_string()))
    }

    /// All records for an article
    pub fn by_article(&self, article_id: &ArticleId) -> Vec<&CommentRecord> {
        self.comments
            .values()
            .filter(|c| &c.article_id == article_id)
            .collect()
    }

    /// All records sorted by submission time
    pub fn all_sorted(&self) -> Vec<&CommentRecord> {
        let mut records: Vec<_> = self.comments.values().collect();
        records.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
        records
    }

    /// Apply an action's flags to a set of records, returning the prior
    /// flags per id so the update can be rolled back. Unknown ids are
    /// skipped: the status store tracks ids the record store may not hold.
    pub fn apply_action(
        &mut self,
        ids: &[CommentId],
        action: ModerationAction,
    ) -> Vec<(CommentId, ModerationFlags)> {
        let mut previous = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(record) = self.comments.get_mut(id) {
                previous.push((id.clone(), record.flags));
                record.apply_action(action);
            }
        }
        previous
    }

    /// Restore flag snapshots captured by [`apply_action`](Self::apply_action)
    pub fn restore_flags(&mut self, snapshots: &[(CommentId, ModerationFlags)]) {
        for (id, flags) in snapshots {
            if let Some(record) = self.comments.get_mut(id) {
                record.flags = *flags;
            }
        }
    }

    /// Get total record count
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
