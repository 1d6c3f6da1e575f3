//! Moderation state management
//!
//! Tracks, per article or category scope, which comment ids sit in which
//! named moderation bucket, and applies bucket-membership transitions when
//! moderation actions are taken.

pub mod action;
pub mod bucket;
pub mod state;
pub mod store;

pub use action::ModerationAction;
pub use bucket::Bucket;
pub use state::ModerationState;
pub use store::ModerationStatusStore;
