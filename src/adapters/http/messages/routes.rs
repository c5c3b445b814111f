//! Axum router configuration for the message feed.

use axum::{routing::get, Router};

use super::handlers::{list_messages, MessagesAppState};

/// Create the messages router, relative to its mount point.
///
/// # Routes
/// - `GET /messages` - Messages after an optional `cursor`
pub fn messages_routes() -> Router<MessagesAppState> {
    Router::new().route("/messages", get(list_messages))
}

/// Create the versioned messages router, suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", messages_router())
///     .with_state(MessagesAppState::new(chat_source));
/// ```
pub fn messages_router() -> Router<MessagesAppState> {
    Router::new().nest("/v1", messages_routes())
}
