//! Chat Source Adapters.
//!
//! Implementations of the ChatSource port.
//!
//! ## Available Adapters
//!
//! - `InMemoryChatSource` - Fixture-backed feed for development and demos
//! - `MockChatSource` - Scripted responses and call recording for tests

mod in_memory;
mod mock_source;

pub use in_memory::{InMemoryChatSource, SeedError};
pub use mock_source::{MockChatSource, MockResponse};
