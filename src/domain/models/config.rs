use serde::{Deserialize, Serialize};

/// Main configuration structure for Hearth
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Database configuration
///
/// The `server`/`name`/`user`/`password` fields mirror the legacy `DB_*`
/// environment surface. `server` carries the store location: either a full
/// sqlx URL (`sqlite:listings.db`, `sqlite::memory:`) or a bare file path.
/// When no server is configured, reads degrade to fallback data instead of
/// failing at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Store location (sqlx URL or file path); `DB_SERVER`
    #[serde(default)]
    pub server: Option<String>,

    /// Database name; `DB_NAME`
    #[serde(default)]
    pub name: Option<String>,

    /// Credential user; `DB_USER`
    #[serde(default)]
    pub user: Option<String>,

    /// Credential password; `DB_PASSWORD`
    #[serde(default)]
    pub password: Option<String>,

    /// Minimum number of pooled connections
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds an idle connection is kept before being reaped
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Seconds to wait for a pooled connection before giving up
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Seconds to wait on a locked database before failing the statement
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

const fn default_min_connections() -> u32 {
    1
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_idle_timeout_secs() -> u64 {
    30
}

const fn default_acquire_timeout_secs() -> u64 {
    10
}

const fn default_busy_timeout_secs() -> u64 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            server: None,
            name: None,
            user: None,
            password: None,
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            idle_timeout_secs: default_idle_timeout_secs(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    /// Resolve the configured store location to a sqlx connection URL.
    ///
    /// Returns `None` when no server is configured; the connection manager
    /// turns that into `StoreError::NotConfigured` and reads fall back.
    pub fn connection_url(&self) -> Option<String> {
        let server = self.server.as_deref()?;
        if server.contains(':') {
            Some(server.to_string())
        } else {
            Some(format!("sqlite:{server}"))
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_url_from_bare_path() {
        let config = DatabaseConfig {
            server: Some(".data/listings.db".to_string()),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            config.connection_url().as_deref(),
            Some("sqlite:.data/listings.db")
        );
    }

    #[test]
    fn test_connection_url_passes_through_full_urls() {
        let config = DatabaseConfig {
            server: Some("sqlite::memory:".to_string()),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.connection_url().as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_connection_url_absent_when_unconfigured() {
        assert_eq!(DatabaseConfig::default().connection_url(), None);
    }
}
