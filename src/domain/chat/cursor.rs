//! Opaque pagination cursor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resume point in a message feed: "give me what comes after this".
///
/// The token is opaque. It is never parsed or normalized here and reaches the
/// chat source exactly as the client sent it, including the empty string.
/// "No cursor" is `Option<Cursor>::None`, not an empty token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
