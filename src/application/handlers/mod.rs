//! Query handlers, grouped by feature.

pub mod chat;
