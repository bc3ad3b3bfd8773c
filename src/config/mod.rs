//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SOBERBOOKINGS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use soberbookings::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod logging;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use server::{Environment, ServerConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Variable consulted for the log file when `logging.file` is unset
pub const LOG_FILE_ENV_VAR: &str = "LOG_FILE";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Notion webhook intake (secret variable, signature header)
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Log format and optional file output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SOBERBOOKINGS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `LOG_FILE` when no log file is configured
    ///
    /// # Environment Variable Format
    ///
    /// - `SOBERBOOKINGS__SERVER__PORT=9000` -> `server.port = 9000`
    /// - `SOBERBOOKINGS__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOBERBOOKINGS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.logging = config
            .logging
            .with_fallback_file(std::env::var_os(LOG_FILE_ENV_VAR));

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.webhook.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
