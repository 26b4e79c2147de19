//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `LAKEHOUSE_ADVISOR` prefix and nested
//! values are separated by double underscores. Every section has defaults, so
//! an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use lakehouse_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Logging at {}", config.logging.level);
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging configuration (level, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Snapshot output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `LAKEHOUSE_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `LAKEHOUSE_ADVISOR__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `LAKEHOUSE_ADVISOR__OUTPUT__PRETTY=false` -> `output.pretty = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LAKEHOUSE_ADVISOR")
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
    /// Returns `ValidationError` if the log level is not recognized.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 3] = [
        "LAKEHOUSE_ADVISOR__LOGGING__LEVEL",
        "LAKEHOUSE_ADVISOR__LOGGING__FORMAT",
        "LAKEHOUSE_ADVISOR__OUTPUT__PRETTY",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LAKEHOUSE_ADVISOR__LOGGING__LEVEL", "debug");
        env::set_var("LAKEHOUSE_ADVISOR__LOGGING__FORMAT", "json");
        env::set_var("LAKEHOUSE_ADVISOR__OUTPUT__PRETTY", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LAKEHOUSE_ADVISOR__LOGGING__LEVEL", "loud");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
