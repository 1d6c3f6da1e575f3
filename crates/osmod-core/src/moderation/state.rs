//! Per-scope moderation state: the seven named buckets

use super::bucket::Bucket;
use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// One scope's bucket collection: an ordered comment-id sequence per bucket.
///
/// Insertion order is preserved. Membership is guarded on insert, so a
/// bucket never holds the same id twice. The field names match the
/// data-service payload, so a fetched bucket set deserializes directly
/// into this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationState {
    pub approved: Vec<CommentId>,
    pub highlighted: Vec<CommentId>,
    pub rejected: Vec<CommentId>,
    pub deferred: Vec<CommentId>,
    pub flagged: Vec<CommentId>,
    pub batched: Vec<CommentId>,
    pub automated: Vec<CommentId>,
}

impl ModerationState {
    /// The all-empty state handed out for scopes that were never loaded
    pub const EMPTY: ModerationState = ModerationState {
        approved: Vec::new(),
        highlighted: Vec::new(),
        rejected: Vec::new(),
        deferred: Vec::new(),
        flagged: Vec::new(),
        batched: Vec::new(),
        automated: Vec::new(),
    };

    /// Create an all-empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered ids in a bucket
    pub fn ids(&self, bucket: Bucket) -> &[CommentId] {
        match bucket {
            Bucket::Approved => &self.approved,
            Bucket::Highlighted => &self.highlighted,
            Bucket::Rejected => &self.rejected,
            Bucket::Deferred => &self.deferred,
            Bucket::Flagged => &self.flagged,
            Bucket::Batched => &self.batched,
            Bucket::Automated => &self.automated,
        }
    }

    fn ids_mut(&mut self, bucket: Bucket) -> &mut Vec<CommentId> {
        match bucket {
            Bucket::Approved => &mut self.approved,
            Bucket::Highlighted => &mut self.highlighted,
            Bucket::Rejected => &mut self.rejected,
            Bucket::Deferred => &mut self.deferred,
            Bucket::Flagged => &mut self.flagged,
            Bucket::Batched => &mut self.batched,
            Bucket::Automated => &mut self.automated,
        }
    }

    /// Whether a bucket contains an id
    pub fn contains(&self, bucket: Bucket, id: &CommentId) -> bool {
        self.ids(bucket).contains(id)
    }

    /// Append an id to a bucket, preserving insertion order.
    /// No-op when the id is already present.
    pub fn insert(&mut self, bucket: Bucket, id: &CommentId) {
        let ids = self.ids_mut(bucket);
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }

    /// Remove an id from a bucket. No-op when the id is absent.
    pub fn remove(&mut self, bucket: Bucket, id: &CommentId) {
        self.ids_mut(bucket).retain(|existing| existing != id);
    }

    /// Number of ids in a bucket
    pub fn len(&self, bucket: Bucket) -> usize {
        self.ids(bucket).len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        Bucket::ALL.iter().all(|bucket| self.ids(*bucket).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> CommentId {
        CommentId::from_string(s)
    }

    #[test]
    fn test_empty_state_has_all_seven_buckets_empty() {
        let state = ModerationState::new();
        for bucket in Bucket::ALL {
            assert!(state.ids(bucket).is_empty());
        }
        assert!(state.is_empty());
        assert_eq!(state, ModerationState::EMPTY);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut state = ModerationState::new();
        state.insert(Bucket::Approved, &id("c3"));
        state.insert(Bucket::Approved, &id("c1"));
        state.insert(Bucket::Approved, &id("c2"));

        assert_eq!(
            state.ids(Bucket::Approved),
            &[id("c3"), id("c1"), id("c2")]
        );
    }

    #[test]
    fn test_insert_is_membership_guarded() {
        let mut state = ModerationState::new();
        state.insert(Bucket::Rejected, &id("c1"));
        state.insert(Bucket::Rejected, &id("c1"));

        assert_eq!(state.len(Bucket::Rejected), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut state = ModerationState::new();
        state.remove(Bucket::Deferred, &id("ghost"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_remove_leaves_other_buckets_alone() {
        let mut state = ModerationState::new();
        state.insert(Bucket::Approved, &id("c1"));
        state.insert(Bucket::Batched, &id("c1"));

        state.remove(Bucket::Approved, &id("c1"));

        assert!(!state.contains(Bucket::Approved, &id("c1")));
        assert!(state.contains(Bucket::Batched, &id("c1")));
    }

    #[test]
    fn test_deserializes_from_service_payload() {
        let payload = r#"{
            "approved": ["c1"],
            "highlighted": [],
            "rejected": ["c2", "c3"],
            "deferred": [],
            "flagged": ["c4"],
            "batched": [],
            "automated": []
        }"#;
        let state: ModerationState = serde_json::from_str(payload).unwrap();
        assert_eq!(state.ids(Bucket::Rejected), &[id("c2"), id("c3")]);
        assert_eq!(state.ids(Bucket::Flagged), &[id("c4")]);
    }

    #[test]
    fn test_missing_buckets_default_to_empty() {
        let state: ModerationState = serde_json::from_str(r#"{"approved": ["c1"]}"#).unwrap();
        assert_eq!(state.len(Bucket::Approved), 1);
        assert!(state.ids(Bucket::Automated).is_empty());
    }
}
