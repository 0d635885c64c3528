use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid pool bounds: min_connections ({0}) exceeds max_connections ({1})")]
    InvalidPoolBounds(u32, u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout: {0}. Must be positive")]
    InvalidRequestTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. hearth.yaml (project config)
    /// 3. hearth.local.yaml (local overrides, optional)
    /// 4. `HEARTH_*` environment variables (nested keys split on `__`)
    /// 5. Legacy `DB_SERVER` / `DB_NAME` / `DB_USER` / `DB_PASSWORD`
    ///    variables, mapped into the `database` section
    ///
    /// A missing or unreachable store location never fails here: the
    /// connection manager reports it on acquire and reads fall back.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("hearth.yaml"))
            .merge(Yaml::file("hearth.local.yaml"))
            .merge(Env::prefixed("HEARTH_").split("__"))
            .merge(
                Env::prefixed("DB_")
                    .only(&["server", "name", "user", "password"])
                    .map(|key| format!("database.{key}").into()),
            )
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(ConfigError::InvalidPoolBounds(
                config.database.min_connections,
                config.database.max_connections,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.http.bind.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::InvalidBindAddress(config.http.bind.clone()));
        }

        if config.http.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidRequestTimeout(
                config.http.request_timeout_secs,
            ));
        }

        Ok(())
    }
}
