//! Chat Feed - cursor-paginated read-through feed of chat messages.
//!
//! The crate exposes `GET /api/v1/messages?cursor=...` on top of any
//! upstream chat provider that implements the [`ports::ChatSource`] port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
