//! JSON-fixture moderation service
//!
//! Serves bucket payloads from a fixture file so the CLI can run against
//! recorded data without a backend. `moderate` calls succeed and are only
//! logged.

use crate::service::{ModeratorService, SortKey};
use async_trait::async_trait;
use osmod_core::moderation::{ModerationAction, ModerationState};
use osmod_core::types::{ArticleId, CategoryScope, CommentId};
use osmod_core::{OsmodError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Fixture file shape: scope keys to bucket payloads
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureFile {
    articles: HashMap<String, ModerationState>,
    categories: HashMap<String, ModerationState>,
}

/// [`ModeratorService`] backed by a JSON fixture file
pub struct FixtureModeratorService {
    fixture: FixtureFile,
}

impl FixtureModeratorService {
    /// Load a fixture from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| OsmodError::FileNotFound(path.to_path_buf()))?;
        let fixture: FixtureFile = serde_json::from_str(&content)?;
        Ok(Self { fixture })
    }
}

#[async_trait]
impl ModeratorService for FixtureModeratorService {
    async fn moderated_ids_for_article(
        &self,
        article_id: &ArticleId,
        _sort: &[SortKey],
    ) -> Result<ModerationState> {
        Ok(self
            .fixture
            .articles
            .get(article_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn moderated_ids_for_category(
        &self,
        category: &CategoryScope,
        _sort: &[SortKey],
    ) -> Result<ModerationState> {
        Ok(self
            .fixture
            .categories
            .get(category.as_key())
            .cloned()
            .unwrap_or_default())
    }

    async fn moderate(&self, action: ModerationAction, comment_ids: &[CommentId]) -> Result<()> {
        info!(action = %action, count = comment_ids.len(), "fixture moderate call");
        Ok(())
    }
}
