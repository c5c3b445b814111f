//! GetMessagesAfterHandler - Query handler for reading the message feed.
//!
//! Makes a single call to the chat source and classifies the answer as
//! either a non-empty page of messages or an empty one. Failures are passed
//! through untouched; there is no retry and no local recovery.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::chat::{Cursor, MessageBatch};
use crate::ports::{ChatSource, ChatSourceError};

/// Query for the messages after an optional cursor.
#[derive(Debug, Clone, Default)]
pub struct GetMessagesAfterQuery {
    /// Resume point. `None` asks for the initial window.
    pub cursor: Option<Cursor>,
}

/// Outcome of a successful feed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFeed {
    /// At least one message, in source order.
    Messages(MessageBatch),
    /// Nothing after the cursor.
    Empty,
}

impl From<MessageBatch> for MessageFeed {
    fn from(batch: MessageBatch) -> Self {
        if batch.is_empty() {
            MessageFeed::Empty
        } else {
            MessageFeed::Messages(batch)
        }
    }
}

/// Handler for reading messages after a cursor.
pub struct GetMessagesAfterHandler {
    chat_source: Arc<dyn ChatSource>,
}

impl GetMessagesAfterHandler {
    pub fn new(chat_source: Arc<dyn ChatSource>) -> Self {
        Self { chat_source }
    }

    pub async fn handle(
        &self,
        query: GetMessagesAfterQuery,
    ) -> Result<MessageFeed, ChatSourceError> {
        let cursor = query.cursor.as_ref();

        match self.chat_source.get_messages_after(cursor).await {
            Ok(batch) => {
                debug!(cursor = ?cursor.map(Cursor::as_str), count = batch.len(), "Fetched messages");
                Ok(MessageFeed::from(batch))
            }
            Err(err) => {
                warn!(cursor = ?cursor.map(Cursor::as_str), error = %err, "Chat source failed");
                Err(err)
            }
        }
    }
}
