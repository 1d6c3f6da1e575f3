//! In-memory moderation service for tests and local development

use crate::service::{ModeratorService, SortKey};
use async_trait::async_trait;
use osmod_core::moderation::{ModerationAction, ModerationState};
use osmod_core::types::{ArticleId, CategoryScope, CommentId, Scope};
use osmod_core::{OsmodError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory [`ModeratorService`] with canned per-scope payloads.
///
/// Records every `moderate` call and can be told to fail specific actions,
/// which is how the dispatcher's rollback path is exercised.
#[derive(Default)]
pub struct InMemoryModeratorService {
    payloads: Mutex<HashMap<Scope, ModerationState>>,
    calls: Mutex<Vec<(ModerationAction, Vec<CommentId>)>>,
    fail_actions: Mutex<HashSet<ModerationAction>>,
}

impl InMemoryModeratorService {
    /// Create a service with no payloads
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bucket payload returned for a scope
    pub fn set_payload(&self, scope: Scope, buckets: ModerationState) {
        self.payloads.lock().unwrap().insert(scope, buckets);
    }

    /// Make `moderate` fail for the given action
    pub fn fail_action(&self, action: ModerationAction) {
        self.fail_actions.lock().unwrap().insert(action);
    }

    /// The `moderate` calls seen so far
    pub fn moderate_calls(&self) -> Vec<(ModerationAction, Vec<CommentId>)> {
        self.calls.lock().unwrap().clone()
    }

    fn payload_for(&self, scope: &Scope) -> ModerationState {
        self.payloads
            .lock()
            .unwrap()
            .get(scope)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ModeratorService for InMemoryModeratorService {
    async fn moderated_ids_for_article(
        &self,
        article_id: &ArticleId,
        _sort: &[SortKey],
    ) -> Result<ModerationState> {
        Ok(self.payload_for(&Scope::Article(article_id.clone())))
    }

    async fn moderated_ids_for_category(
        &self,
        category: &CategoryScope,
        _sort: &[SortKey],
    ) -> Result<ModerationState> {
        Ok(self.payload_for(&Scope::Category(category.clone())))
    }

    async fn moderate(&self, action: ModerationAction, comment_ids: &[CommentId]) -> Result<()> {
        if self.fail_actions.lock().unwrap().contains(&action) {
            return Err(OsmodError::Service(format!(
                "injected failure for {}",
                action
            )));
        }
        self.calls
            .lock()
            .unwrap()
            .push((action, comment_ids.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osmod_core::moderation::Bucket;

    fn id(s: &str) -> CommentId {
        CommentId::from_string(s)
    }

    #[tokio::test]
    async fn test_payload_round_trip() {
        let service = InMemoryModeratorService::new();
        let mut buckets = ModerationState::new();
        buckets.insert(Bucket::Approved, &id("c1"));
        service.set_payload(Scope::article("a1"), buckets.clone());

        let fetched = service
            .moderated_ids_for_article(&ArticleId::from_string("a1"), &[])
            .await
            .unwrap();
        assert_eq!(fetched, buckets);
    }

    #[tokio::test]
    async fn test_unknown_scope_returns_empty() {
        let service = InMemoryModeratorService::new();
        let fetched = service
            .moderated_ids_for_category(&CategoryScope::All, &[])
            .await
            .unwrap();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_moderate_records_calls() {
        let service = InMemoryModeratorService::new();
        service
            .moderate(ModerationAction::Approve, &[id("c1"), id("c2")])
            .await
            .unwrap();

        let calls = service.moderate_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ModerationAction::Approve);
        assert_eq!(calls[0].1, vec![id("c1"), id("c2")]);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let service = InMemoryModeratorService::new();
        service.fail_action(ModerationAction::Reject);

        let result = service.moderate(ModerationAction::Reject, &[id("c1")]).await;
        assert!(result.is_err());
        assert!(service.moderate_calls().is_empty());
    }
}
