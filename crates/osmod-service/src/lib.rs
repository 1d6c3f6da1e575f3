//! osmod-service - Moderation service seam and action dispatcher
//!
//! Defines the [`ModeratorService`] trait the dashboard consumes for bucket
//! fetches and remote moderation calls, in-memory and JSON-fixture
//! implementations of it, and the [`CommentActionDispatcher`] that ties
//! optimistic record updates, the remote call, and the status-store
//! transition together.

pub mod dispatcher;
pub mod fixture;
pub mod memory;
pub mod service;

pub use dispatcher::{CommentActionDispatcher, DispatchReceipt};
pub use fixture::FixtureModeratorService;
pub use memory::InMemoryModeratorService;
pub use service::{ModeratorService, SortKey};
