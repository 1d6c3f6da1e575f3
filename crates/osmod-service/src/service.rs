//! The moderation service trait

use async_trait::async_trait;
use osmod_core::moderation::{ModerationAction, ModerationState};
use osmod_core::types::{ArticleId, CategoryScope, CommentId};
use osmod_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sort parameter sent with bucket fetches, e.g. `-score` or `-sent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey(pub String);

impl SortKey {
    /// Create a SortKey from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        SortKey(s.into())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The remote moderation backend as the dashboard consumes it.
///
/// `moderated_ids_for_*` return the per-bucket comment-id lists already
/// partitioned into the seven named buckets. `moderate` maps to one remote
/// endpoint per action verb; implementations branch on the typed action.
#[async_trait]
pub trait ModeratorService: Send + Sync {
    /// Fetch the moderated comment-id buckets for an article
    async fn moderated_ids_for_article(
        &self,
        article_id: &ArticleId,
        sort: &[SortKey],
    ) -> Result<ModerationState>;

    /// Fetch the moderated comment-id buckets for a category scope
    async fn moderated_ids_for_category(
        &self,
        category: &CategoryScope,
        sort: &[SortKey],
    ) -> Result<ModerationState>;

    /// Apply a moderation action to an ordered list of comment ids
    async fn moderate(&self, action: ModerationAction, comment_ids: &[CommentId]) -> Result<()>;
}
