//! The per-scope moderation status store

use super::action::ModerationAction;
use super::bucket::Bucket;
use super::state::ModerationState;
use crate::types::{ArticleId, CategoryScope, CommentId, Scope};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Associative store mapping a scope to its named-bucket collection of
/// comment ids.
///
/// Article and category scopes live in separate maps and never interact.
/// A scope's state is created empty on demand, replaced wholesale by
/// [`complete_load`](Self::complete_load), incrementally mutated by
/// [`transition`](Self::transition), and never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationStatusStore {
    /// True until the first successful load of either scope map
    is_loading: bool,
    /// Per-article moderation state
    articles: HashMap<ArticleId, ModerationState>,
    /// Per-category moderation state, including the "all" sentinel
    categories: HashMap<CategoryScope, ModerationState>,
}

impl ModerationStatusStore {
    /// Create an empty store. `is_loading` starts true: nothing has been
    /// fetched yet.
    pub fn new() -> Self {
        Self {
            is_loading: true,
            articles: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Mark a load as in flight. Idempotent; no other effect.
    pub fn start_load(&mut self) {
        self.is_loading = true;
    }

    /// Replace the moderation state for a scope with server-provided
    /// buckets and clear the loading flag. Any prior state for the scope
    /// is overwritten unconditionally; there is no merge.
    pub fn complete_load(&mut self, scope: &Scope, buckets: ModerationState) {
        debug!(scope = %scope, "load complete, replacing bucket set");
        match scope {
            Scope::Article(id) => {
                self.articles.insert(id.clone(), buckets);
            }
            Scope::Category(cat) => {
                self.categories.insert(cat.clone(), buckets);
            }
        }
        self.is_loading = false;
    }

    /// Apply a moderation action to a set of comment ids within a scope.
    ///
    /// `previous` is the bucket each comment sat in before the action
    /// (`None` for an unmoderated comment). Ids are processed
    /// independently: each id's membership update depends only on its own
    /// previous bucket, so the final state does not depend on iteration
    /// order. A `previous` bucket that does not actually contain an id is
    /// tolerated as a no-op removal.
    ///
    /// After the call, every id satisfies the store invariant: membership
    /// in at most one terminal bucket, except that a highlighted id is
    /// also approved.
    pub fn transition(
        &mut self,
        scope: &Scope,
        comment_ids: &[CommentId],
        action: ModerationAction,
        previous: Option<Bucket>,
    ) {
        debug!(
            scope = %scope,
            action = %action,
            count = comment_ids.len(),
            "applying bucket transition"
        );
        let state = self.state_mut(scope);
        for id in comment_ids {
            Self::transition_one(state, id, action, previous);
        }
    }

    fn transition_one(
        state: &mut ModerationState,
        id: &CommentId,
        action: ModerationAction,
        previous: Option<Bucket>,
    ) {
        let already_highlighted = previous == Some(Bucket::Highlighted);

        // Removal: only terminal statuses are removed; highlighting an
        // already-highlighted comment is a no-op and skips removal. A
        // highlighted comment is also a member of approved, so leaving
        // the highlighted bucket means leaving approved too.
        if let Some(prev) = previous {
            let highlight_noop = already_highlighted && action == ModerationAction::Highlight;
            if prev.is_terminal() && !highlight_noop {
                state.remove(prev, id);
                if prev == Bucket::Highlighted {
                    state.remove(Bucket::Approved, id);
                }
            }
        }

        // Insertion: one explicit arm per action.
        match action {
            ModerationAction::Approve => state.insert(Bucket::Approved, id),
            ModerationAction::Reject => state.insert(Bucket::Rejected, id),
            ModerationAction::Defer => state.insert(Bucket::Deferred, id),
            ModerationAction::Highlight => {
                if !already_highlighted {
                    state.insert(Bucket::Highlighted, id);
                    state.insert(Bucket::Approved, id);
                }
            }
            // The comment returns to the unmoderated state: no new membership.
            ModerationAction::Reset => {}
        }
    }

    /// The moderation state for a scope. Returns the all-empty state for a
    /// scope that has never been loaded; never fails, never mutates.
    pub fn moderation_state(&self, scope: &Scope) -> &ModerationState {
        let state = match scope {
            Scope::Article(id) => self.articles.get(id),
            Scope::Category(cat) => self.categories.get(cat),
        };
        static EMPTY: ModerationState = ModerationState::EMPTY;
        state.unwrap_or(&EMPTY)
    }

    /// Whether a load is in flight (or nothing has been loaded yet)
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn state_mut(&mut self, scope: &Scope) -> &mut ModerationState {
        match scope {
            Scope::Article(id) => self.articles.entry(id.clone()).or_default(),
            Scope::Category(cat) => self.categories.entry(cat.clone()).or_default(),
        }
    }
}

impl Default for ModerationStatusStore {
    fn default() -> Self {
        Self::new()
    }
}
