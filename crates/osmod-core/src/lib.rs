//! osmod-core - Core library for osmod
//!
//! This crate provides the state-transition core of the moderation dashboard:
//! comment records, moderation buckets, the per-scope moderation status store,
//! and the session model that ties them together.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod moderation;
pub mod session;

pub use error::{OsmodError, Result};
pub use types::*;
