//! In-Memory Chat Source Adapter
//!
//! Serves an ordered feed held in memory. Cursors are message ids: a cursor
//! resumes right after the message carrying that id. Useful for development
//! and for running the service without a real chat provider.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::chat::{Cursor, Message, MessageBatch, DEFAULT_WINDOW_SIZE};
use crate::ports::{ChatSource, ChatSourceError};

/// Errors raised while building or extending the feed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate message id in feed: {0}")]
    DuplicateId(String),
}

/// In-memory chat feed.
///
/// Message ids are unique within the feed; cursors resolve to exactly one
/// position.
#[derive(Debug, Clone)]
pub struct InMemoryChatSource {
    messages: Arc<RwLock<Vec<Message>>>,
    window: usize,
}

impl InMemoryChatSource {
    /// Create an empty feed with the given page size (at least 1).
    pub fn new(window: usize) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            window: window.max(1),
        }
    }

    /// Create a feed pre-populated with `messages`, in the given order.
    pub fn with_messages(messages: Vec<Message>, window: usize) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(messages.len());
        if let Some(dup) = messages.iter().find(|m| !seen.insert(m.id().as_str())) {
            return Err(SeedError::DuplicateId(dup.id().to_string()));
        }

        Ok(Self {
            messages: Arc::new(RwLock::new(messages)),
            window: window.max(1),
        })
    }

    /// Load a feed from a JSON array of messages.
    pub async fn from_seed_file(path: impl AsRef<Path>, window: usize) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await.map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let messages: Vec<Message> =
            serde_json::from_slice(&raw).map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_messages(messages, window)
    }

    /// Append a message to the end of the feed.
    pub async fn push(&self, message: Message) -> Result<(), SeedError> {
        let mut messages = self.messages.write().await;
        if messages.iter().any(|m| m.id() == message.id()) {
            return Err(SeedError::DuplicateId(message.id().to_string()));
        }
        messages.push(message);
        Ok(())
    }

    /// Number of messages in the feed.
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for InMemoryChatSource {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

#[async_trait]
impl ChatSource for InMemoryChatSource {
    async fn get_messages_after(
        &self,
        cursor: Option<&Cursor>,
    ) -> Result<MessageBatch, ChatSourceError> {
        let messages = self.messages.read().await;

        let page = match cursor {
            // Most recent window, oldest first
            None => {
                let start = messages.len().saturating_sub(self.window);
                &messages[start..]
            }
            Some(cursor) => {
                let position = messages
                    .iter()
                    .position(|m| m.id().as_str() == cursor.as_str())
                    .ok_or_else(|| ChatSourceError::new("Wrong cursor"))?;
                let rest = &messages[position + 1..];
                &rest[..rest.len().min(self.window)]
            }
        };

        Ok(page.iter().cloned().collect())
    }
}
