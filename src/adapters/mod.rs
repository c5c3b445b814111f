//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `chat` - Chat source implementations (in-memory, mock)
//! - `http` - REST API

pub mod chat;
pub mod http;

pub use chat::{InMemoryChatSource, MockChatSource};
