//! osmod-storage - Session persistence for osmod
//!
//! Provides the [`SessionStore`] trait and a JSON-file implementation so
//! the CLI can keep moderation sessions between invocations.

mod session_store;

pub use session_store::{FileSystemSessionStore, SessionStore};
