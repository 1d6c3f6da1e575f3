//! Comment action dispatcher
//!
//! Orchestrates one moderation action end to end: optimistic record
//! update, remote call, bucket transition. State is owned by the caller
//! and passed in; the dispatcher holds only the service handle.

use crate::service::{ModeratorService, SortKey};
use chrono::{DateTime, Utc};
use osmod_core::comment::CommentRecordStore;
use osmod_core::moderation::{Bucket, ModerationAction, ModerationStatusStore};
use osmod_core::types::{CommentId, Scope};
use osmod_core::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Receipt for a completed moderation dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// Unique id for this dispatch
    pub id: Uuid,
    /// The action that was applied
    pub action: ModerationAction,
    /// The comment ids it was applied to
    pub comment_ids: Vec<CommentId>,
    /// When the remote call resolved
    pub completed_at: DateTime<Utc>,
}

/// Dispatches moderation actions against a [`ModeratorService`]
pub struct CommentActionDispatcher {
    service: Arc<dyn ModeratorService>,
}

impl CommentActionDispatcher {
    /// Create a dispatcher over a service handle
    pub fn new(service: Arc<dyn ModeratorService>) -> Self {
        Self { service }
    }

    /// Load the bucket lists for a scope into the status store.
    ///
    /// Sets the loading flag, fetches, and replaces the scope's state. A
    /// fetch failure propagates and leaves the loading flag set; the
    /// store's prior state for the scope is untouched.
    pub async fn load(
        &self,
        statuses: &mut ModerationStatusStore,
        scope: &Scope,
        sort: &[SortKey],
    ) -> Result<()> {
        statuses.start_load();
        let buckets = match scope {
            Scope::Article(id) => self.service.moderated_ids_for_article(id, sort).await?,
            Scope::Category(cat) => self.service.moderated_ids_for_category(cat, sort).await?,
        };
        statuses.complete_load(scope, buckets);
        Ok(())
    }

    /// Apply a moderation action to a set of comments.
    ///
    /// The comment records are updated optimistically before the remote
    /// call. When the call fails, the records are rolled back to their
    /// prior flags, no bucket transition is applied, and the error
    /// propagates to the caller for notification handling.
    pub async fn moderate(
        &self,
        comments: &mut CommentRecordStore,
        statuses: &mut ModerationStatusStore,
        scope: &Scope,
        comment_ids: &[CommentId],
        action: ModerationAction,
        previous: Option<Bucket>,
    ) -> Result<DispatchReceipt> {
        let snapshots = comments.apply_action(comment_ids, action);

        if let Err(err) = self.service.moderate(action, comment_ids).await {
            warn!(action = %action, error = %err, "remote moderation failed, rolling back");
            comments.restore_flags(&snapshots);
            return Err(err);
        }

        statuses.transition(scope, comment_ids, action, previous);
        info!(
            scope = %scope,
            action = %action,
            count = comment_ids.len(),
            "moderation action applied"
        );

        Ok(DispatchReceipt {
            id: Uuid::new_v4(),
            action,
            comment_ids: comment_ids.to_vec(),
            completed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryModeratorService;
    use osmod_core::comment::{CommentRecord, ModerationFlags};
    use osmod_core::moderation::ModerationState;
    use osmod_core::types::ArticleId;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> CommentId {
        CommentId::from_string(s)
    }

    fn record(s: &str) -> CommentRecord {
        CommentRecord::new(
            id(s),
            ArticleId::from_string("a1"),
            "reader",
            "Test comment",
        )
    }

    fn setup() -> (
        Arc<InMemoryModeratorService>,
        CommentActionDispatcher,
        CommentRecordStore,
        ModerationStatusStore,
    ) {
        let service = Arc::new(InMemoryModeratorService::new());
        let dispatcher = CommentActionDispatcher::new(service.clone());
        (
            service,
            dispatcher,
            CommentRecordStore::new(),
            ModerationStatusStore::new(),
        )
    }

    #[tokio::test]
    async fn test_load_populates_scope() {
        let (service, dispatcher, _, mut statuses) = setup();
        let scope = Scope::article("a1");
        let mut buckets = ModerationState::new();
        buckets.insert(Bucket::Flagged, &id("c1"));
        service.set_payload(scope.clone(), buckets.clone());

        dispatcher.load(&mut statuses, &scope, &[]).await.unwrap();

        assert!(!statuses.is_loading());
        assert_eq!(statuses.moderation_state(&scope), &buckets);
    }

    #[tokio::test]
    async fn test_moderate_applies_transition_and_flags() {
        let (service, dispatcher, mut comments, mut statuses) = setup();
        let scope = Scope::article("a1");
        comments.add(record("c1")).unwrap();

        let mut buckets = ModerationState::new();
        buckets.insert(Bucket::Rejected, &id("c1"));
        statuses.complete_load(&scope, buckets);

        let receipt = dispatcher
            .moderate(
                &mut comments,
                &mut statuses,
                &scope,
                &[id("c1")],
                ModerationAction::Approve,
                Some(Bucket::Rejected),
            )
            .await
            .unwrap();

        assert_eq!(receipt.action, ModerationAction::Approve);
        assert_eq!(receipt.comment_ids, vec![id("c1")]);

        let state = statuses.moderation_state(&scope);
        assert!(state.ids(Bucket::Rejected).is_empty());
        assert_eq!(state.ids(Bucket::Approved), &[id("c1")]);

        assert_eq!(
            comments.get(&id("c1")).unwrap().flags.is_accepted,
            Some(true)
        );
        assert_eq!(service.moderate_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_rolls_back_and_skips_transition() {
        let (service, dispatcher, mut comments, mut statuses) = setup();
        let scope = Scope::article("a1");
        comments.add(record("c1")).unwrap();
        statuses.complete_load(&scope, ModerationState::new());
        service.fail_action(ModerationAction::Reject);

        let before = statuses.clone();
        let result = dispatcher
            .moderate(
                &mut comments,
                &mut statuses,
                &scope,
                &[id("c1")],
                ModerationAction::Reject,
                None,
            )
            .await;

        assert!(result.is_err());
        // Optimistic flag update reverted
        assert_eq!(
            comments.get(&id("c1")).unwrap().flags,
            ModerationFlags::default()
        );
        // Transition gated on remote success
        assert_eq!(statuses, before);
    }

    #[tokio::test]
    async fn test_moderate_batch() {
        let (_, dispatcher, mut comments, mut statuses) = setup();
        let scope = Scope::category("all");
        comments.add(record("c1")).unwrap();
        comments.add(record("c2")).unwrap();

        dispatcher
            .moderate(
                &mut comments,
                &mut statuses,
                &scope,
                &[id("c1"), id("c2")],
                ModerationAction::Defer,
                None,
            )
            .await
            .unwrap();

        let state = statuses.moderation_state(&scope);
        assert_eq!(state.ids(Bucket::Deferred), &[id("c1"), id("c2")]);
        assert!(comments.get(&id("c1")).unwrap().flags.is_deferred);
        assert!(comments.get(&id("c2")).unwrap().flags.is_deferred);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_loading_flag() {
        struct FailingService;

        #[async_trait::async_trait]
        impl crate::service::ModeratorService for FailingService {
            async fn moderated_ids_for_article(
                &self,
                _article_id: &ArticleId,
                _sort: &[SortKey],
            ) -> Result<ModerationState> {
                Err(osmod_core::OsmodError::Service("boom".to_string()))
            }

            async fn moderated_ids_for_category(
                &self,
                _category: &osmod_core::types::CategoryScope,
                _sort: &[SortKey],
            ) -> Result<ModerationState> {
                Err(osmod_core::OsmodError::Service("boom".to_string()))
            }

            async fn moderate(
                &self,
                _action: ModerationAction,
                _comment_ids: &[CommentId],
            ) -> Result<()> {
                Ok(())
            }
        }

        let dispatcher = CommentActionDispatcher::new(Arc::new(FailingService));
        let mut statuses = ModerationStatusStore::new();

        let result = dispatcher
            .load(&mut statuses, &Scope::article("a1"), &[])
            .await;

        assert!(result.is_err());
        assert!(statuses.is_loading());
    }
}
