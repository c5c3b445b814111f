//! Chat Source Port - Interface for upstream chat providers.
//!
//! This port abstracts where chat messages come from (Gitter, IRC, an
//! in-memory fixture...). The message feed endpoint depends only on this
//! contract, so tests can swap in a double without any network.
//!
//! # Contract
//!
//! - `cursor == None` returns the initial/most recent window of messages.
//! - `cursor == Some(c)` returns messages strictly after the position `c`
//!   denotes. Window size and ordering are the implementation's concern.
//! - An empty batch is a valid answer, not an error.
//! - Any failure is reported as a [`ChatSourceError`] carrying only a
//!   human-readable description.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EmptySource;
//!
//! #[async_trait]
//! impl ChatSource for EmptySource {
//!     async fn get_messages_after(
//!         &self,
//!         _cursor: Option<&Cursor>,
//!     ) -> Result<MessageBatch, ChatSourceError> {
//!         Ok(MessageBatch::empty())
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::chat::{Cursor, MessageBatch};

/// Port for reading chat messages from an upstream provider.
#[async_trait]
pub trait ChatSource: Send + Sync {
    /// Fetch the messages that come after `cursor`.
    async fn get_messages_after(
        &self,
        cursor: Option<&Cursor>,
    ) -> Result<MessageBatch, ChatSourceError>;
}

/// Failure reported by a chat source.
///
/// Deliberately opaque: callers get the description and nothing else. The
/// `Display` output is the description itself, without any prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ChatSourceError {
    message: String,
}

impl ChatSourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ChatSourceError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ChatSourceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{Message, MessageId};

    struct FixedSource {
        ids: Vec<&'static str>,
    }

    #[async_trait]
    impl ChatSource for FixedSource {
        async fn get_messages_after(
            &self,
            cursor: Option<&Cursor>,
        ) -> Result<MessageBatch, ChatSourceError> {
            if cursor.map(Cursor::as_str) == Some("bad") {
                return Err(ChatSourceError::new("Wrong cursor"));
            }
            Ok(self
                .ids
                .iter()
                .map(|id| Message::new(MessageId::new(*id).unwrap(), "hi"))
                .collect())
        }
    }

    #[test]
    fn error_displays_message_verbatim() {
        let err = ChatSourceError::new("Wrong cursor");
        assert_eq!(err.to_string(), "Wrong cursor");
        assert_eq!(err.message(), "Wrong cursor");
    }

    #[test]
    fn error_converts_from_strings() {
        assert_eq!(ChatSourceError::from("boom").message(), "boom");
        assert_eq!(ChatSourceError::from("boom".to_string()).message(), "boom");
    }

    #[tokio::test]
    async fn trait_object_is_usable() {
        let source: Box<dyn ChatSource> = Box::new(FixedSource { ids: vec!["1", "2"] });

        let batch = source.get_messages_after(None).await.unwrap();
        assert_eq!(batch.len(), 2);

        let err = source
            .get_messages_after(Some(&Cursor::new("bad")))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Wrong cursor");
    }
}
