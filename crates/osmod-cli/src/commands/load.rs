//! `osmod load` - fetch bucket lists for a scope into a session

use super::ScopeArgs;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use osmod_core::config::Config;
use osmod_core::moderation::Bucket;
use osmod_service::{CommentActionDispatcher, FixtureModeratorService, SortKey};
use osmod_storage::SessionStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the load command
#[derive(Debug, Args)]
pub struct LoadArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// JSON fixture file with the recorded bucket payloads
    #[arg(long)]
    pub fixture: PathBuf,

    /// Session to load into (defaults to the latest, or a new one)
    #[arg(long)]
    pub session: Option<String>,
}

/// Execute the load command
pub async fn execute(args: LoadArgs, config: &Config) -> Result<()> {
    let scope = args.scope.to_scope()?;
    let service = FixtureModeratorService::from_file(&args.fixture)
        .with_context(|| format!("Failed to read fixture {:?}", args.fixture))?;
    let dispatcher = CommentActionDispatcher::new(Arc::new(service));

    let store = super::open_store(config)?;
    let mut session = super::resolve_session(&store, args.session.as_deref())?;

    let sort: Vec<SortKey> = config
        .moderation
        .default_sort
        .iter()
        .map(SortKey::from_string)
        .collect();

    dispatcher
        .load(&mut session.statuses, &scope, &sort)
        .await
        .context("Failed to load moderated comment ids")?;

    session.touch();
    store.save(&session)?;

    println!(
        "{} {} into session {}",
        "Loaded".green().bold(),
        scope,
        session.id
    );
    let state = session.statuses.moderation_state(&scope);
    for bucket in Bucket::ALL {
        println!("  {:<12} {}", bucket.to_string(), state.len(bucket));
    }

    Ok(())
}
