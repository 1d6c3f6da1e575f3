//! Comment records and the local record store
//!
//! The moderation flags on these records are what the dispatcher updates
//! optimistically before the remote call resolves.

pub mod model;
pub mod store;

pub use model::{CommentRecord, ModerationFlags};
pub use store::CommentRecordStore;
