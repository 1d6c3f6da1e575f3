//! Moderation actions

use super::bucket::Bucket;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A moderation action a human moderator takes on a set of comments.
///
/// Each action maps to its own target bucket through an explicit match arm;
/// reject and defer are distinct actions with distinct buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    /// Accept the comment for publication
    Approve,
    /// Reject the comment
    Reject,
    /// Set the comment aside for a later decision
    Defer,
    /// Feature the comment; implies approval
    Highlight,
    /// Return the comment to the unmoderated state
    Reset,
}

impl ModerationAction {
    /// The bucket this action inserts into, or `None` for reset.
    ///
    /// Highlight targets the highlighted bucket; the additional approved
    /// membership it implies is applied by the store transition.
    pub fn target_bucket(&self) -> Option<Bucket> {
        match self {
            ModerationAction::Approve => Some(Bucket::Approved),
            ModerationAction::Reject => Some(Bucket::Rejected),
            ModerationAction::Defer => Some(Bucket::Deferred),
            ModerationAction::Highlight => Some(Bucket::Highlighted),
            ModerationAction::Reset => None,
        }
    }

    /// Lowercase wire verb, matching the remote moderation endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
            ModerationAction::Defer => "defer",
            ModerationAction::Highlight => "highlight",
            ModerationAction::Reset => "reset",
        }
    }
}

impl FromStr for ModerationAction {
    type Err = crate::OsmodError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "approve" => Ok(ModerationAction::Approve),
            "reject" => Ok(ModerationAction::Reject),
            "defer" => Ok(ModerationAction::Defer),
            "highlight" => Ok(ModerationAction::Highlight),
            "reset" => Ok(ModerationAction::Reset),
            _ => Err(crate::OsmodError::Validation(format!(
                "Unknown moderation action: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
