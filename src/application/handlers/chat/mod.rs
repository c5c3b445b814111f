//! Chat query handlers.

mod get_messages_after;

pub use get_messages_after::{GetMessagesAfterHandler, GetMessagesAfterQuery, MessageFeed};
