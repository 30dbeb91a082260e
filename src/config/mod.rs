//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VERIFIER_TESTBED` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a runnable service.
//!
//! # Example
//!
//! ```no_run
//! use verifier_testbed::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod authorization;
mod callback;
mod error;
mod server;

pub use authorization::AuthorizationConfig;
pub use callback::{CallbackConfig, ProxyConfig, ProxyKind};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Orchestrator callback delivery (timeout, proxy)
    #[serde(default)]
    pub callback: CallbackConfig,

    /// Authorization request URIs
    #[serde(default)]
    pub authorization: AuthorizationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VERIFIER_TESTBED` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VERIFIER_TESTBED__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VERIFIER_TESTBED__CALLBACK__PROXY__ENABLED=true` -> `callback.proxy.enabled = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VERIFIER_TESTBED")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
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
        self.callback.validate()?;
        self.authorization.validate()?;
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
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("VERIFIER_TESTBED__SERVER__PORT");
        env::remove_var("VERIFIER_TESTBED__SERVER__ENVIRONMENT");
        env::remove_var("VERIFIER_TESTBED__CALLBACK__TIMEOUT_SECS");
        env::remove_var("VERIFIER_TESTBED__AUTHORIZATION__SCHEME");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.authorization.scheme, "openid4vp");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VERIFIER_TESTBED__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VERIFIER_TESTBED__SERVER__PORT", "3000");
        env::set_var("VERIFIER_TESTBED__CALLBACK__TIMEOUT_SECS", "5");
        env::set_var("VERIFIER_TESTBED__AUTHORIZATION__SCHEME", "eudi-openid4vp");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.callback.timeout_secs, 5);
        assert_eq!(config.authorization.scheme, "eudi-openid4vp");
    }
}
