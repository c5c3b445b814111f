//! Chat source configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::chat::DEFAULT_WINDOW_SIZE;

use super::error::ValidationError;

/// Largest page the in-memory chat source may serve.
pub const MAX_WINDOW_SIZE: usize = 1000;

/// Chat source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Messages returned per page
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// JSON file with messages to preload into the feed
    pub seed_file: Option<PathBuf>,
}

impl ChatConfig {
    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.window_size == 0 || self.window_size > MAX_WINDOW_SIZE {
            return Err(ValidationError::InvalidWindowSize {
                actual: self.window_size,
                max: MAX_WINDOW_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            seed_file: None,
        }
    }
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.window_size, 50);
        assert!(config.seed_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_size_bounds() {
        for window_size in [0, MAX_WINDOW_SIZE + 1] {
            let config = ChatConfig {
                window_size,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        let config = ChatConfig {
            window_size: MAX_WINDOW_SIZE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chat_config_deserialization() {
        let json = r#"{ "window_size": 20, "seed_file": "/tmp/seed.json" }"#;

        let config: ChatConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.window_size, 20);
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/seed.json")));
    }
}
