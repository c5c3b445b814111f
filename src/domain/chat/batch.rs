//! Ordered batch of messages returned for one query.

use super::message::{Message, MessageId};

/// Messages returned by a chat source for a single query, in source order.
///
/// Zero length is a legitimate result ("nothing after this cursor") and is
/// distinct from a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBatch {
    messages: Vec<Message>,
}

impl MessageBatch {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Ids in batch order.
    pub fn ids(&self) -> Vec<&MessageId> {
        self.messages.iter().map(Message::id).collect()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl From<Vec<Message>> for MessageBatch {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}

impl FromIterator<Message> for MessageBatch {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for MessageBatch {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str) -> Message {
        Message::new(MessageId::new(id).unwrap(), format!("text {}", id))
    }

    #[test]
    fn empty_batch_has_no_messages() {
        let batch = MessageBatch::empty();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn preserves_insertion_order() {
        let batch: MessageBatch = ["3", "1", "2"].into_iter().map(message).collect();
        let ids: Vec<&str> = batch.ids().into_iter().map(MessageId::as_str).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn into_messages_returns_all() {
        let batch = MessageBatch::new(vec![message("a"), message("b")]);
        let messages = batch.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].id().as_str(), "b");
    }
}
