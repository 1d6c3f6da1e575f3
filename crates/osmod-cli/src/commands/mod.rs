//! CLI commands module

pub mod config;
pub mod load;
pub mod moderate;
pub mod summary;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use osmod_core::config::Config;
use osmod_core::session::ModerationSession;
use osmod_core::types::{Scope, SessionId};
use osmod_storage::{FileSystemSessionStore, SessionStore};
use std::path::PathBuf;

/// osmod - comment moderation from the terminal
#[derive(Debug, Parser)]
#[command(name = "osmod")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the moderated comment-id buckets for a scope into a session
    Load(load::LoadArgs),

    /// Apply a moderation action to comment ids in a scope
    Moderate(moderate::ModerateArgs),

    /// Show per-bucket counts for a scope
    Summary(summary::SummaryArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Scope selection shared by the queue commands
#[derive(Debug, Args)]
pub struct ScopeArgs {
    /// Article id to scope to
    #[arg(long, conflicts_with = "category")]
    pub article: Option<String>,

    /// Category key to scope to ("all" for every category)
    #[arg(long)]
    pub category: Option<String>,
}

impl ScopeArgs {
    /// Resolve to a typed scope
    pub fn to_scope(&self) -> Result<Scope> {
        match (&self.article, &self.category) {
            (Some(article), None) => Ok(Scope::article(article.clone())),
            (None, Some(category)) => Ok(Scope::category(category.clone())),
            _ => anyhow::bail!("exactly one of --article or --category is required"),
        }
    }
}

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Load(args) => load::execute(args, &config).await,
        Commands::Moderate(args) => moderate::execute(args, &config).await,
        Commands::Summary(args) => summary::execute(args, &config),
        Commands::Config(cmd) => config::execute(cmd, cli.config.as_deref()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Default configuration file location
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("org", "osmod", "osmod")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".osmod/config.toml")
        })
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load_from(path).with_context(|| format!("Failed to load config {:?}", path))
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                Config::load_from(&path)
                    .with_context(|| format!("Failed to load config {:?}", path))
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Open the session store configured for this invocation
pub fn open_store(config: &Config) -> Result<FileSystemSessionStore> {
    let store = match &config.storage.base_dir {
        Some(base) => FileSystemSessionStore::new(base.clone())?,
        None => FileSystemSessionStore::default_location()?,
    };
    Ok(store)
}

/// Load the named session, or the latest, or start a fresh one
pub fn resolve_session(
    store: &FileSystemSessionStore,
    session_id: Option<&str>,
) -> Result<ModerationSession> {
    match session_id {
        Some(raw) => {
            let id = SessionId::from_string(raw)?;
            Ok(store.load(&id)?)
        }
        None => match store.latest()? {
            Some(session) => Ok(session),
            None => Ok(ModerationSession::new()),
        },
    }
}
