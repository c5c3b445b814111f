//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHAT_FEED` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use chat_feed::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod chat;
mod error;
mod server;

pub use chat::{ChatConfig, MAX_WINDOW_SIZE};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults, so an empty environment is a valid setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat source configuration (window size, seed data)
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHAT_FEED` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHAT_FEED__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHAT_FEED__CHAT__WINDOW_SIZE=20` -> `chat.window_size = 20`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::from_env()
    }

    /// Load and validate configuration in one step.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` for unparseable values and
    /// `ConfigError::ValidationFailed` for values that parse but are invalid.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the process environment only, skipping `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHAT_FEED")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.chat.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("CHAT_FEED__SERVER__PORT");
        env::remove_var("CHAT_FEED__SERVER__ENVIRONMENT");
        env::remove_var("CHAT_FEED__SERVER__CORS_ORIGINS");
        env::remove_var("CHAT_FEED__CHAT__WINDOW_SIZE");
        env::remove_var("CHAT_FEED__CHAT__SEED_FILE");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::from_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.chat.window_size, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_FEED__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_FEED__SERVER__PORT", "3000");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_chat_settings() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_FEED__CHAT__WINDOW_SIZE", "20");
        env::set_var("CHAT_FEED__CHAT__SEED_FILE", "/srv/seed.json");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.chat.window_size, 20);
        assert_eq!(config.chat.seed_file, Some(PathBuf::from("/srv/seed.json")));
    }

    #[test]
    fn test_validate_rejects_bad_window() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_FEED__CHAT__WINDOW_SIZE", "0");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWindowSize { actual: 0, .. })
        ));
    }

    #[test]
    fn test_load_validated_reports_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_FEED__CHAT__WINDOW_SIZE", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidWindowSize { .. }))
        ));
    }

    #[test]
    fn test_unparseable_port_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_FEED__SERVER__PORT", "not-a-port");
        let result = AppConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
