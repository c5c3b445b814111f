//! Chat domain - messages, cursors and message batches.
//!
//! These are transient values: a `ChatSource` builds them per request and the
//! HTTP adapter consumes them immediately. Nothing here is persisted.

mod batch;
mod cursor;
mod errors;
mod message;

pub use batch::MessageBatch;
pub use cursor::Cursor;
pub use errors::ValidationError;
pub use message::{Message, MessageId};

/// Messages served per page when no window size is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 50;
