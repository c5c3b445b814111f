//! HTTP DTOs (Data Transfer Objects) for the message feed.
//!
//! These types define the JSON response structure of the messages API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::chat::Message;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A single message in the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Message id, usable as the next `cursor`.
    pub id: String,
    /// Message body as sent by the provider.
    pub text: String,
    /// Author display name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    /// When the provider recorded the message (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sent_at: Option<String>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id().to_string(),
            text: message.text().to_string(),
            author: message.author().map(str::to_string),
            sent_at: message.sent_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Error body returned when the chat source fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Failure description from the chat source, verbatim.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::MessageId;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn message_response_serializes_all_fields() {
        let sent = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let message = Message::new(MessageId::new("42").unwrap(), "hello")
            .with_author("alice")
            .with_sent_at(sent);

        let value = serde_json::to_value(MessageResponse::from(message)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "42",
                "text": "hello",
                "author": "alice",
                "sent_at": "2024-03-01T12:00:00+00:00"
            })
        );
    }

    #[test]
    fn message_response_omits_missing_payload() {
        let message = Message::new(MessageId::new("7").unwrap(), "hi");

        let value = serde_json::to_value(MessageResponse::from(message)).unwrap();

        assert_eq!(value, json!({ "id": "7", "text": "hi" }));
    }

    #[test]
    fn message_id_is_always_a_string() {
        let message = Message::new(MessageId::new("0").unwrap(), "");

        let value = serde_json::to_value(MessageResponse::from(message)).unwrap();

        assert!(value["id"].is_string());
    }

    #[test]
    fn error_response_has_single_message_field() {
        let value = serde_json::to_value(ErrorResponse::new("Wrong cursor")).unwrap();
        assert_eq!(value, json!({ "message": "Wrong cursor" }));
    }
}
