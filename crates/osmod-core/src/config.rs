//! Configuration management for osmod

use crate::error::{OsmodError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Moderation service settings
    pub service: ServiceConfig,
    /// Moderation behavior settings
    pub moderation: ModerationConfig,
    /// Session storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| OsmodError::FileNotFound(path.to_path_buf()))?;
        toml::from_str(&content).map_err(|e| OsmodError::Toml(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| OsmodError::Toml(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Moderation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the moderation backend
    pub base_url: String,
    /// Remote call timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Moderation behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Sort keys sent with bucket fetches
    pub default_sort: Vec<String>,
    /// Maximum number of comment ids per dispatched action
    pub batch_limit: usize,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            default_sort: vec!["-score".to_string(), "-sent".to_string()],
            batch_limit: 100,
        }
    }
}

/// Session storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base directory for persisted sessions; resolved to the platform
    /// data directory when unset
    pub base_dir: Option<PathBuf>,
}
