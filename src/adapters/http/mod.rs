//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter module; `app` assembles them.

pub mod app;
pub mod messages;

// Re-export key types for convenience
pub use app::{api_router, build_app};
pub use messages::MessagesAppState;
pub use messages::messages_router;
