//! `osmod summary` - per-bucket counts for a scope

use super::ScopeArgs;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use osmod_core::config::Config;
use osmod_core::moderation::Bucket;

/// Arguments for the summary command
#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Also print the comment ids in each bucket
    #[arg(long)]
    pub ids: bool,

    /// Session to read (defaults to the latest)
    #[arg(long)]
    pub session: Option<String>,
}

/// Execute the summary command
pub fn execute(args: SummaryArgs, config: &Config) -> Result<()> {
    let scope = args.scope.to_scope()?;
    let store = super::open_store(config)?;
    let session = super::resolve_session(&store, args.session.as_deref())?;

    println!(
        "{} {} (session {})",
        "Moderation state for".bold(),
        scope,
        session.id
    );
    if session.statuses.is_loading() {
        println!("  {}", "(no data loaded yet)".yellow());
    }

    let state = session.statuses.moderation_state(&scope);
    for bucket in Bucket::ALL {
        let count = state.len(bucket);
        println!("  {:<12} {}", bucket.to_string(), count);
        if args.ids {
            for id in state.ids(bucket) {
                println!("    {}", id);
            }
        }
    }

    Ok(())
}
