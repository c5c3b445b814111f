//! Domain layer containing the chat value types.
//!
//! # Module Organization
//!
//! - `chat` - Messages, cursors and message batches

pub mod chat;
