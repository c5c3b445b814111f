//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates calls to ports. The feed is read-only, so there
//! are only query handlers.

pub mod handlers;

pub use handlers::chat::{GetMessagesAfterHandler, GetMessagesAfterQuery, MessageFeed};
