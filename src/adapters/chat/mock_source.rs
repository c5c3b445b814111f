//! Mock Chat Source for testing.
//!
//! Provides a configurable mock implementation of the ChatSource port,
//! allowing tests to run without a chat provider.
//!
//! # Features
//!
//! - Scripted responses, consumed in order
//! - A fallback response once the script runs out
//! - Error injection
//! - Call tracking for verifying the forwarded cursor
//!
//! # Example
//!
//! ```ignore
//! let source = MockChatSource::new().with_messages(10);
//!
//! let batch = source.get_messages_after(Some(&Cursor::new("qwerty"))).await?;
//! assert_eq!(batch.len(), 10);
//! assert_eq!(source.calls(), vec![Some("qwerty".to_string())]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::chat::{Cursor, Message, MessageBatch, MessageId};
use crate::ports::{ChatSource, ChatSourceError};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this batch.
    Batch(MessageBatch),
    /// Fail with this description.
    Error(String),
}

/// Mock chat source for testing.
#[derive(Debug, Clone)]
pub struct MockChatSource {
    /// Scripted responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Returned when the script is exhausted.
    fallback: MockResponse,
    /// Cursor of every call, `None` for "no cursor".
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl Default for MockChatSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChatSource {
    /// Creates a mock that answers every call with an empty batch.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback: MockResponse::Batch(MessageBatch::empty()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a batch of `count` messages with ids `"0"`..`count-1`.
    pub fn with_messages(self, count: usize) -> Self {
        self.with_batch(Self::numbered_batch(count))
    }

    /// Queues a specific batch.
    pub fn with_batch(self, batch: MessageBatch) -> Self {
        lock(&self.responses).push_back(MockResponse::Batch(batch));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(message.into()));
        self
    }

    /// Sets the response used once the queue is empty.
    pub fn with_fallback(mut self, response: MockResponse) -> Self {
        self.fallback = response;
        self
    }

    /// Cursors received so far, in call order.
    pub fn calls(&self) -> Vec<Option<String>> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Builds a batch of messages with ids `"0"`..`count-1`.
    pub fn numbered_batch(count: usize) -> MessageBatch {
        (0..count)
            .filter_map(|i| {
                MessageId::new(i.to_string())
                    .ok()
                    .map(|id| Message::new(id, format!("Message #{}", i)).with_author("mock"))
            })
            .collect()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ChatSource for MockChatSource {
    async fn get_messages_after(
        &self,
        cursor: Option<&Cursor>,
    ) -> Result<MessageBatch, ChatSourceError> {
        lock(&self.calls).push(cursor.map(|c| c.as_str().to_string()));

        let response = lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match response {
            MockResponse::Batch(batch) => Ok(batch),
            MockResponse::Error(message) => Err(ChatSourceError::new(message)),
        }
    }
}
