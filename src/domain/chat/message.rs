//! Chat message value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ValidationError;

/// Identifier of a message, unique within its feed.
///
/// Ordering between ids is the provider's business; here they are only
/// compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageId(String);

impl MessageId {
    /// Creates a new MessageId, returning error if empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("message_id"));
        }
        if id.trim().is_empty() {
            return Err(ValidationError::invalid_format(
                "message_id",
                "contains whitespace only",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MessageId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        id.0
    }
}

/// A single chat message as produced by a chat source.
///
/// Everything except `id` is provider payload and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    sent_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            author: None,
            sent_at: None,
        }
    }

    /// Sets the author display name.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the time the provider recorded the message.
    pub fn with_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn message_id_rejects_empty() {
        assert_eq!(
            MessageId::new(""),
            Err(ValidationError::empty_field("message_id"))
        );
    }

    #[test]
    fn message_id_rejects_blank() {
        assert!(matches!(
            MessageId::new("   "),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn message_id_accepts_provider_ids() {
        let id = MessageId::new("5a1b2c3d4e").unwrap();
        assert_eq!(id.as_str(), "5a1b2c3d4e");
        assert_eq!(id.to_string(), "5a1b2c3d4e");
    }

    #[test]
    fn builder_sets_optional_fields() {
        let sent = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let message = Message::new(MessageId::new("1").unwrap(), "hello")
            .with_author("alice")
            .with_sent_at(sent);

        assert_eq!(message.id().as_str(), "1");
        assert_eq!(message.text(), "hello");
        assert_eq!(message.author(), Some("alice"));
        assert_eq!(message.sent_at(), Some(sent));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let message: Message = serde_json::from_str(r#"{"id":"7","text":"hi"}"#).unwrap();
        assert_eq!(message.id().as_str(), "7");
        assert_eq!(message.author(), None);
        assert_eq!(message.sent_at(), None);
    }

    #[test]
    fn deserialization_rejects_empty_id() {
        let result: Result<Message, _> = serde_json::from_str(r#"{"id":"","text":"hi"}"#);
        assert!(result.is_err());
    }
}
