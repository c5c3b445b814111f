//! HTTP handlers for the message feed.
//!
//! These handlers connect Axum routes to the application layer query handler.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::handlers::chat::{
    GetMessagesAfterHandler, GetMessagesAfterQuery, MessageFeed,
};
use crate::domain::chat::Cursor;
use crate::ports::{ChatSource, ChatSourceError};

use super::dto::{ErrorResponse, MessageResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Messages API error that implements IntoResponse.
///
/// Every chat source failure goes through here and comes out as
/// `500 {"message": "<description>"}`. The failure kind is not inspected.
#[derive(Debug)]
pub struct ChatApiError(ChatSourceError);

impl From<ChatSourceError> for ChatApiError {
    fn from(err: ChatSourceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.0.message());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the messages endpoints.
#[derive(Clone)]
pub struct MessagesAppState {
    pub chat_source: Arc<dyn ChatSource>,
}

impl MessagesAppState {
    pub fn new(chat_source: Arc<dyn ChatSource>) -> Self {
        Self { chat_source }
    }

    pub fn get_messages_after_handler(&self) -> GetMessagesAfterHandler {
        GetMessagesAfterHandler::new(self.chat_source.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the messages endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct MessagesParams {
    /// Opaque resume token. `?cursor=` is `Some("")`, not `None`.
    pub cursor: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/messages?cursor=<token>
///
/// - `200` with a JSON array when there are messages after the cursor
/// - `204` with no body when there are none
/// - `500` with `{"message": ...}` when the chat source fails
pub async fn list_messages(
    State(state): State<MessagesAppState>,
    Query(params): Query<MessagesParams>,
) -> Result<Response, ChatApiError> {
    let query = GetMessagesAfterQuery {
        cursor: params.cursor.map(Cursor::from),
    };

    let handler = state.get_messages_after_handler();
    let feed = handler.handle(query).await?;

    let response = match feed {
        MessageFeed::Messages(batch) => {
            let body: Vec<MessageResponse> =
                batch.into_iter().map(MessageResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        MessageFeed::Empty => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}
