//! Core type definitions for osmod

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment, assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl CommentId {
    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an article
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub String);

impl ArticleId {
    /// Create an ArticleId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        ArticleId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Create a CategoryId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CategoryId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category scope: either a concrete category or the "all" sentinel.
///
/// Serializes as its wire key ("all" or the category id) so it can be used
/// as a map key in persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryScope {
    /// All categories combined
    All,
    /// A single category
    Id(CategoryId),
}

impl Serialize for CategoryScope {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for CategoryScope {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(CategoryScope::from_key(key))
    }
}

impl CategoryScope {
    /// Parse from the wire representation ("all" or a category id)
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        if key == "all" {
            CategoryScope::All
        } else {
            CategoryScope::Id(CategoryId(key))
        }
    }

    /// Wire representation of this scope
    pub fn as_key(&self) -> &str {
        match self {
            CategoryScope::All => "all",
            CategoryScope::Id(id) => id.as_str(),
        }
    }
}

impl fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// A moderation scope: the article or category a set of buckets belongs to.
///
/// Article and category scopes are disjoint namespaces and never interact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Per-article moderation lists
    Article(ArticleId),
    /// Per-category moderation lists (including the "all" sentinel)
    Category(CategoryScope),
}

impl Scope {
    /// Convenience constructor for an article scope
    pub fn article(id: impl Into<String>) -> Self {
        Scope::Article(ArticleId::from_string(id))
    }

    /// Convenience constructor for a category scope ("all" is the sentinel)
    pub fn category(key: impl Into<String>) -> Self {
        Scope::Category(CategoryScope::from_key(key))
    }

    /// Whether this is a category scope
    pub fn is_category(&self) -> bool {
        matches!(self, Scope::Category(_))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Article(id) => write!(f, "article:{}", id),
            Scope::Category(scope) => write!(f, "category:{}", scope),
        }
    }
}

/// Unique identifier for a moderation session
/// Format: YYYYMMDDHHMMSS-<short_uuid>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new SessionId
    pub fn generate() -> Self {
        let now = chrono::Utc::now();
        let uuid = Uuid::new_v4();
        let short_uuid = &uuid.to_string()[..8];
        SessionId(format!("{}-{}", now.format("%Y%m%d%H%M%S"), short_uuid))
    }

    /// Create from a string with validation
    pub fn from_string(s: impl Into<String>) -> crate::Result<Self> {
        let s = s.into();
        if Self::validate(&s) {
            Ok(SessionId(s))
        } else {
            Err(crate::OsmodError::Validation(format!(
                "Invalid session ID format: {}",
                s
            )))
        }
    }

    /// Validate session ID format
    fn validate(s: &str) -> bool {
        // Format: YYYYMMDDHHMMSS-xxxxxxxx
        if s.len() < 23 {
            return false;
        }
        let parts: Vec<&str> = s.splitn(2, '-').collect();
        if parts.len() != 2 {
            return false;
        }
        parts[0].len() == 14 && parts[0].chars().all(|c| c.is_ascii_digit())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_display() {
        let id = CommentId::from_string("c123");
        assert_eq!(id.to_string(), "c123");
    }

    #[test]
    fn test_category_scope_sentinel() {
        assert_eq!(CategoryScope::from_key("all"), CategoryScope::All);
        assert_eq!(
            CategoryScope::from_key("politics"),
            CategoryScope::Id(CategoryId::from_string("politics"))
        );
        assert_eq!(CategoryScope::All.as_key(), "all");
    }

    #[test]
    fn test_scope_namespaces_disjoint() {
        // An article and a category with the same raw key are distinct scopes
        let article = Scope::article("42");
        let category = Scope::category("42");
        assert_ne!(article, category);
        assert!(!article.is_category());
        assert!(category.is_category());
    }

    #[test]
    fn test_category_scope_serde_as_key() {
        let json = serde_json::to_string(&CategoryScope::All).unwrap();
        assert_eq!(json, "\"all\"");

        let parsed: CategoryScope = serde_json::from_str("\"politics\"").unwrap();
        assert_eq!(parsed, CategoryScope::from_key("politics"));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::article("a1").to_string(), "article:a1");
        assert_eq!(Scope::category("all").to_string(), "category:all");
    }

    #[test]
    fn test_session_id_generation() {
        let id = SessionId::generate();
        assert!(id.0.len() >= 23);
        assert!(id.0.contains('-'));
    }

    #[test]
    fn test_session_id_validation() {
        assert!(SessionId::from_string("20241231120000-abcd1234").is_ok());
        assert!(SessionId::from_string("invalid").is_err());
        assert!(SessionId::from_string("2024-abcd1234").is_err());
    }
}
