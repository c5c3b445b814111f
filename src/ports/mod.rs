//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChatSource` - Upstream chat provider that serves messages after a cursor

mod chat_source;

pub use chat_source::{ChatSource, ChatSourceError};
