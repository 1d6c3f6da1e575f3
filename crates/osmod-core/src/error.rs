//! Error types for osmod

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for osmod
#[derive(Debug, Error)]
pub enum OsmodError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Session not found
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Remote moderation service error
    #[error("Moderation service error: {0}")]
    Service(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<OsmodError>,
    },
}

impl OsmodError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        OsmodError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for osmod
pub type Result<T> = std::result::Result<T, OsmodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OsmodError::CommentNotFound("c42".to_string());
        assert_eq!(err.to_string(), "Comment not found: c42");
    }

    #[test]
    fn test_error_with_context() {
        let err = OsmodError::Service("timeout".to_string());
        let err = err.with_context("Failed to apply approve");
        assert!(err.to_string().contains("Failed to apply approve"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OsmodError = io_err.into();
        assert!(matches!(err, OsmodError::Io(_)));
    }
}
