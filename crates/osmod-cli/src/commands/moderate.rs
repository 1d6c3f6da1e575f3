//! `osmod moderate` - apply a moderation action to comment ids

use super::ScopeArgs;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use osmod_core::config::Config;
use osmod_core::moderation::{Bucket, ModerationAction};
use osmod_core::types::CommentId;
use osmod_service::{CommentActionDispatcher, FixtureModeratorService, InMemoryModeratorService, ModeratorService};
use osmod_storage::SessionStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the moderate command
#[derive(Debug, Args)]
pub struct ModerateArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Action to apply: approve, reject, defer, highlight or reset
    #[arg(long)]
    pub action: ModerationAction,

    /// Comma-separated comment ids
    #[arg(long, value_delimiter = ',', required = true)]
    pub ids: Vec<String>,

    /// Bucket the comments currently sit in (omit for unmoderated)
    #[arg(long)]
    pub previous: Option<Bucket>,

    /// JSON fixture file backing the remote service (optional)
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Session to update (defaults to the latest)
    #[arg(long)]
    pub session: Option<String>,
}

/// Execute the moderate command
pub async fn execute(args: ModerateArgs, config: &Config) -> Result<()> {
    let scope = args.scope.to_scope()?;
    let comment_ids: Vec<CommentId> = args
        .ids
        .iter()
        .map(|id| CommentId::from_string(id.as_str()))
        .collect();

    if comment_ids.len() > config.moderation.batch_limit {
        anyhow::bail!(
            "batch of {} ids exceeds the configured limit of {}",
            comment_ids.len(),
            config.moderation.batch_limit
        );
    }

    let service: Arc<dyn ModeratorService> = match &args.fixture {
        Some(path) => Arc::new(
            FixtureModeratorService::from_file(path)
                .with_context(|| format!("Failed to read fixture {:?}", path))?,
        ),
        None => Arc::new(InMemoryModeratorService::new()),
    };
    let dispatcher = CommentActionDispatcher::new(service);

    let store = super::open_store(config)?;
    let mut session = super::resolve_session(&store, args.session.as_deref())?;

    let receipt = dispatcher
        .moderate(
            &mut session.comments,
            &mut session.statuses,
            &scope,
            &comment_ids,
            args.action,
            args.previous,
        )
        .await
        .context("Moderation action failed; local state was rolled back")?;

    session.touch();
    store.save(&session)?;

    println!(
        "{} {} on {} comment(s) in {} (dispatch {})",
        "Applied".green().bold(),
        receipt.action,
        receipt.comment_ids.len(),
        scope,
        receipt.id
    );

    Ok(())
}
