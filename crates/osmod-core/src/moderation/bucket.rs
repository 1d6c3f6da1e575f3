//! Moderation bucket names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named subset of comment ids representing one moderation/workflow
/// category. Exactly these seven exist; no others are ever created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Accepted by a moderator
    Approved,
    /// Featured by a moderator; a highlighted comment is always also approved
    Highlighted,
    /// Rejected by a moderator
    Rejected,
    /// Set aside for a later decision
    Deferred,
    /// Flagged by readers; populated only by the load path
    Flagged,
    /// Resolved by a batch moderation pass
    Batched,
    /// Resolved by an automated rule
    Automated,
}

impl Bucket {
    /// All seven buckets, in display order
    pub const ALL: [Bucket; 7] = [
        Bucket::Approved,
        Bucket::Highlighted,
        Bucket::Rejected,
        Bucket::Deferred,
        Bucket::Flagged,
        Bucket::Batched,
        Bucket::Automated,
    ];

    /// Whether this bucket records a moderation outcome, as opposed to the
    /// batched/automated/flagged workflow overlays.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Bucket::Approved | Bucket::Highlighted | Bucket::Rejected | Bucket::Deferred
        )
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Approved => "approved",
            Bucket::Highlighted => "highlighted",
            Bucket::Rejected => "rejected",
            Bucket::Deferred => "deferred",
            Bucket::Flagged => "flagged",
            Bucket::Batched => "batched",
            Bucket::Automated => "automated",
        }
    }
}

impl FromStr for Bucket {
    type Err = crate::OsmodError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "approved" => Ok(Bucket::Approved),
            "highlighted" => Ok(Bucket::Highlighted),
            "rejected" => Ok(Bucket::Rejected),
            "deferred" => Ok(Bucket::Deferred),
            "flagged" => Ok(Bucket::Flagged),
            "batched" => Ok(Bucket::Batched),
            "automated" => Ok(Bucket::Automated),
            _ => Err(crate::OsmodError::Validation(format!(
                "Unknown bucket name: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
