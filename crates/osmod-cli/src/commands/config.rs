//! `osmod config` - show and initialize configuration

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use osmod_core::config::Config;
use std::path::Path;

/// Configuration subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute a config subcommand
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(super::default_config_path);

    match cmd {
        ConfigCommand::Show => {
            let config = if path.exists() {
                Config::load_from(&path)
                    .with_context(|| format!("Failed to load config {:?}", path))?
            } else {
                Config::default()
            };
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render config")?;
            println!("{} {:?}", "Configuration".bold(), path);
            println!("{}", rendered);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!("{:?} already exists (use --force to overwrite)", path);
            }
            Config::default().save_to(&path)?;
            println!("{} default configuration to {:?}", "Wrote".green().bold(), path);
        }
    }

    Ok(())
}
