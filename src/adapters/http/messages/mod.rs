//! HTTP adapter for the message feed.
//!
//! Exposes the chat source via REST API:
//! - `GET /api/v1/messages` - Messages from the start of the feed
//! - `GET /api/v1/messages?cursor=<token>` - Messages after a cursor

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, MessageResponse};
pub use handlers::{ChatApiError, MessagesAppState, MessagesParams};
pub use routes::{messages_router, messages_routes};
